pub mod aggregate;
pub mod elapsed;
pub mod expected;
pub mod normalizer;
pub mod surplus;
