pub mod date_conv;
pub mod json_extract;
