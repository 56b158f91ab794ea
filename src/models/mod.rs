pub mod break_duration;
pub mod calendar_date;
pub mod day_record;
pub mod derived_day;
pub mod draw_plan;
pub mod metrics;
pub mod time_of_day;
