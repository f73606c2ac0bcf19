//! A compact set of days of the week for schedule configuration ("run on Mon/Wed/Fri").
//!
//! ```
//! use weekday_set::WeekdaySet;
//!
//! let mut days: WeekdaySet = "Mon, tuesday, sun, Fri, Saturday".parse().unwrap();
//! days.parse_remove("Sun, Sat").unwrap();
//! assert_eq!(days.to_string(), "Monday, Tuesday, Friday");
//! assert_eq!(days.marshal(), b"\"Monday, Tuesday, Friday\"".to_vec());
//! ```

pub mod app;
pub mod helpers;

pub use app::errors::{ParseDaysError, UnmarshalError};
pub use app::weekday_code::{calendar_index_to_bits, WeekdayCode, WEEKDAY_CODES};
pub use app::weekday_set::WeekdaySet;
pub use helpers::date_conv::{Clock, FixedClock, SystemClock};
pub use helpers::json_extract::extract_days_from_value_map;
