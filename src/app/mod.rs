pub mod errors;
pub mod weekday_code;
pub mod weekday_set;
