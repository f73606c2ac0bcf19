use chrono::Weekday;

/// One day of the week as seen through the numbering schemes in use:
/// its bit inside a `WeekdaySet`, its ISO-8601 number and its calendar index.
/// The seven values live in `WEEKDAY_CODES`; there is no other way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayCode {
  bit: u8, // Monday = 1 .. Sunday = 64
  iso: u8, // Monday = 1 .. Sunday = 7
  sun: u8, // calendar index, Sunday = 0 .. Saturday = 6
  name: &'static str,
  abbr: &'static str, // lowercase prefix recognised by the text parser
}

impl WeekdayCode {
  // iso must be 1..=7
  const fn new(iso: u8, name: &'static str, abbr: &'static str) -> Self {
    let sun = if iso < 7 { iso } else { 0 };
    WeekdayCode {
      bit: 1 << (iso - 1),
      iso,
      sun,
      name,
      abbr,
    }
  }

  pub const fn bit(&self) -> u8 {
    self.bit
  }

  pub const fn iso(&self) -> u8 {
    self.iso
  }

  pub const fn calendar_index(&self) -> u8 {
    self.sun
  }

  pub const fn name(&self) -> &'static str {
    self.name
  }

  pub const fn abbr(&self) -> &'static str {
    self.abbr
  }

  /// None outside Monday = 1 .. Sunday = 7.
  pub fn from_iso(iso: u8) -> Option<&'static WeekdayCode> {
    match iso {
      1..=7 => Some(&WEEKDAY_CODES[(iso - 1) as usize]),
      _ => None,
    }
  }

  pub fn from_calendar_index(index: u8) -> Option<&'static WeekdayCode> {
    WEEKDAY_CODES.iter().find(|code| code.sun == index)
  }

  pub fn from_weekday(wd: Weekday) -> &'static WeekdayCode {
    // num_days_from_monday is 0..=6
    &WEEKDAY_CODES[wd.num_days_from_monday() as usize]
  }
}

/// Canonical Monday to Sunday order, which is also ascending bit order.
pub static WEEKDAY_CODES: [WeekdayCode; 7] = [
  WeekdayCode::new(1, "Monday", "mon"),
  WeekdayCode::new(2, "Tuesday", "tue"),
  WeekdayCode::new(3, "Wednesday", "wed"),
  WeekdayCode::new(4, "Thursday", "thu"),
  WeekdayCode::new(5, "Friday", "fri"),
  WeekdayCode::new(6, "Saturday", "sat"),
  WeekdayCode::new(7, "Sunday", "sun"),
];

/*
* Calendar indices run Sunday = 0 through Saturday = 6, so Sunday wraps to the
* top bit and every other day shifts down by one. Anything above 6 has no day.
*/
pub fn calendar_index_to_bits(index: u8) -> Option<u8> {
  match index {
    0 => Some(1 << 6),
    1..=6 => Some(1 << (index - 1)),
    _ => None,
  }
}

pub fn weekday_to_calendar_index(wd: Weekday) -> u8 {
  wd.num_days_from_sunday() as u8
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_codes_follow_bit_order() {
    for (pos, code) in WEEKDAY_CODES.iter().enumerate() {
      assert_eq!(code.bit, 1u8 << pos);
      assert_eq!(code.iso as usize, pos + 1);
    }
    assert_eq!(WEEKDAY_CODES[6].sun, 0);
    assert_eq!(WEEKDAY_CODES[0].sun, 1);
  }

  #[test]
  fn test_calendar_index_mapping() {
    assert_eq!(calendar_index_to_bits(0), Some(64));
    assert_eq!(calendar_index_to_bits(1), Some(1));
    assert_eq!(calendar_index_to_bits(3), Some(4));
    assert_eq!(calendar_index_to_bits(6), Some(32));
    assert_eq!(calendar_index_to_bits(7), None);
    for index in 0..7u8 {
      let code = WeekdayCode::from_calendar_index(index).unwrap();
      assert_eq!(calendar_index_to_bits(index), Some(code.bit()));
      assert_eq!(code.calendar_index(), index);
    }
  }

  #[test]
  fn test_from_chrono_weekday() {
    assert_eq!(WeekdayCode::from_weekday(Weekday::Sun).name(), "Sunday");
    assert_eq!(WeekdayCode::from_weekday(Weekday::Wed).bit(), 4);
    assert_eq!(weekday_to_calendar_index(Weekday::Sun), 0);
    assert_eq!(weekday_to_calendar_index(Weekday::Sat), 6);
  }

  #[test]
  fn test_from_iso_rejects_out_of_range() {
    assert_eq!(WeekdayCode::from_iso(0), None);
    assert_eq!(WeekdayCode::from_iso(8), None);
    assert_eq!(WeekdayCode::from_iso(9), None);
    assert_eq!(WeekdayCode::from_iso(u8::MAX), None);
    let sunday = WeekdayCode::from_iso(7).unwrap();
    assert_eq!(sunday.bit(), 64);
    assert_eq!(sunday.calendar_index(), 0);
    assert_eq!(sunday.abbr(), "sun");
    for iso in 1..=7u8 {
      assert_eq!(WeekdayCode::from_iso(iso).unwrap().iso(), iso);
    }
  }
}
