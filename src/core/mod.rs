pub mod add;
pub mod axis;
pub mod calculator;
pub mod chart;
pub mod config;
pub mod logic;
