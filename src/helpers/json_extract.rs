use serde_json::{Map, Value};

use crate::app::weekday_set::WeekdaySet;

/*
* Lenient read of a day set from a loosely typed JSON row: strings go through the
* text parser, numbers are taken as the raw bitmask, anything else is empty.
*/
pub fn extract_days_from_value_map(row: &Map<String, Value>, key: &str) -> WeekdaySet {
  match row.get(key) {
    Some(days_val) => match days_val {
      Value::String(days_str) => days_str.parse::<WeekdaySet>().unwrap_or_default(),
      Value::Number(num_ref) => match num_ref.as_u64() {
        Some(bits) if bits <= u8::MAX as u64 => WeekdaySet::from_bits_truncate(bits as u8),
        _ => WeekdaySet::EMPTY,
      },
      Value::Array(items) => items
        .iter()
        .filter_map(|item| item.as_str())
        .filter_map(|s| s.parse::<WeekdaySet>().ok())
        .fold(WeekdaySet::EMPTY, |acc, days| acc | days),
      _ => WeekdaySet::EMPTY,
    },
    _ => WeekdaySet::EMPTY,
  }
}
