use std::fmt::{self, Display};
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use chrono::{Datelike, Weekday};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::helpers::date_conv::{unixtime_to_weekday, Clock};
use super::errors::{ParseDaysError, UnmarshalError};
use super::weekday_code::{
  calendar_index_to_bits, weekday_to_calendar_index, WeekdayCode, WEEKDAY_CODES,
};

/// A subset of the seven days of the week packed into the low 7 bits of a byte,
/// Monday in bit 0 through Sunday in bit 6.
///
/// The bit layout is stable: Monday = 1, Tuesday = 2, Wednesday = 4, Thursday = 8,
/// Friday = 16, Saturday = 32, Sunday = 64. No higher bit is ever set, and the empty
/// set (0) means "no days selected".
///
/// `WeekdaySet` is a plain `Copy` value with no interior mutability. When one instance
/// is shared mutably between threads, the caller must serialise the mutating calls
/// (`set`, `add_day`, `remove_day`, `clear`, `parse`, `parse_remove`, `unmarshal`).
///
/// On the wire it is a single string such as `"Monday, Wednesday, Friday"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
  pub const MONDAY: WeekdaySet = WeekdaySet(1);
  pub const TUESDAY: WeekdaySet = WeekdaySet(1 << 1);
  pub const WEDNESDAY: WeekdaySet = WeekdaySet(1 << 2);
  pub const THURSDAY: WeekdaySet = WeekdaySet(1 << 3);
  pub const FRIDAY: WeekdaySet = WeekdaySet(1 << 4);
  pub const SATURDAY: WeekdaySet = WeekdaySet(1 << 5);
  pub const SUNDAY: WeekdaySet = WeekdaySet(1 << 6);

  pub const EMPTY: WeekdaySet = WeekdaySet(0);
  pub const ALL: WeekdaySet = WeekdaySet(0b111_1111);

  /// Build a set from one flag per day, Monday first.
  pub fn new(
    mon: bool,
    tue: bool,
    wed: bool,
    thu: bool,
    fri: bool,
    sat: bool,
    sun: bool,
  ) -> Self {
    let mut days = WeekdaySet::EMPTY;
    days.set(mon, tue, wed, thu, fri, sat, sun);
    days
  }

  /// None when any bit above Sunday is set.
  pub const fn from_bits(bits: u8) -> Option<Self> {
    if bits & !Self::ALL.0 == 0 {
      Some(WeekdaySet(bits))
    } else {
      None
    }
  }

  pub const fn from_bits_truncate(bits: u8) -> Self {
    WeekdaySet(bits & Self::ALL.0)
  }

  pub const fn bits(self) -> u8 {
    self.0
  }

  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Number of days selected.
  pub const fn len(self) -> usize {
    self.0.count_ones() as usize
  }

  /// Single-day set for a calendar index (Sunday = 0 .. Saturday = 6).
  pub fn from_calendar_index(index: u8) -> Option<Self> {
    calendar_index_to_bits(index).map(WeekdaySet)
  }

  pub fn from_weekday(wd: Weekday) -> Self {
    WeekdaySet(WeekdayCode::from_weekday(wd).bit())
  }

  /// OR in every day whose flag is true. Days already present stay present;
  /// call `clear` first for a clean slate.
  pub fn set(
    &mut self,
    mon: bool,
    tue: bool,
    wed: bool,
    thu: bool,
    fri: bool,
    sat: bool,
    sun: bool,
  ) {
    let flags = [mon, tue, wed, thu, fri, sat, sun];
    for (code, flag) in WEEKDAY_CODES.iter().zip(flags) {
      if flag {
        self.0 |= code.bit();
      }
    }
  }

  /// True when every bit of `pattern` is present, e.g.
  /// `days.contains(WeekdaySet::SATURDAY | WeekdaySet::SUNDAY)` for the whole weekend.
  pub const fn contains(self, pattern: WeekdaySet) -> bool {
    self.0 & pattern.0 == pattern.0
  }

  pub const fn is_monday(self) -> bool {
    self.contains(Self::MONDAY)
  }

  pub const fn is_tuesday(self) -> bool {
    self.contains(Self::TUESDAY)
  }

  pub const fn is_wednesday(self) -> bool {
    self.contains(Self::WEDNESDAY)
  }

  pub const fn is_thursday(self) -> bool {
    self.contains(Self::THURSDAY)
  }

  pub const fn is_friday(self) -> bool {
    self.contains(Self::FRIDAY)
  }

  pub const fn is_saturday(self) -> bool {
    self.contains(Self::SATURDAY)
  }

  pub const fn is_sunday(self) -> bool {
    self.contains(Self::SUNDAY)
  }

  /// Calendar indices outside 0..=6 name no day and are never contained.
  pub fn is_on_calendar_index(self, index: u8) -> bool {
    match Self::from_calendar_index(index) {
      Some(day) => self.contains(day),
      None => false,
    }
  }

  pub fn is_weekday(self, wd: Weekday) -> bool {
    self.is_on_calendar_index(weekday_to_calendar_index(wd))
  }

  /// Whether the weekday of `date` is selected. The date is taken as given,
  /// no timezone conversion happens here.
  pub fn on_date<D: Datelike>(self, date: &D) -> bool {
    self.is_weekday(date.weekday())
  }

  /// Whether the UTC weekday of a unix timestamp is selected.
  pub fn on_unixtime(self, ts: i64) -> bool {
    match unixtime_to_weekday(ts) {
      Some(wd) => self.is_weekday(wd),
      None => false,
    }
  }

  pub fn today<C: Clock + ?Sized>(self, clock: &C) -> bool {
    self.on_date(&clock.now())
  }

  pub fn add_day(&mut self, day: WeekdaySet) {
    if !self.contains(day) {
      self.0 |= day.0;
    }
  }

  pub fn add_monday(&mut self) {
    self.add_day(Self::MONDAY)
  }

  pub fn add_tuesday(&mut self) {
    self.add_day(Self::TUESDAY)
  }

  pub fn add_wednesday(&mut self) {
    self.add_day(Self::WEDNESDAY)
  }

  pub fn add_thursday(&mut self) {
    self.add_day(Self::THURSDAY)
  }

  pub fn add_friday(&mut self) {
    self.add_day(Self::FRIDAY)
  }

  pub fn add_saturday(&mut self) {
    self.add_day(Self::SATURDAY)
  }

  pub fn add_sunday(&mut self) {
    self.add_day(Self::SUNDAY)
  }

  /// Only flips bits that are currently set, so removing an absent day is a no-op.
  pub fn remove_day(&mut self, day: WeekdaySet) {
    if self.contains(day) {
      self.0 ^= day.0;
    }
  }

  pub fn remove_monday(&mut self) {
    self.remove_day(Self::MONDAY)
  }

  pub fn remove_tuesday(&mut self) {
    self.remove_day(Self::TUESDAY)
  }

  pub fn remove_wednesday(&mut self) {
    self.remove_day(Self::WEDNESDAY)
  }

  pub fn remove_thursday(&mut self) {
    self.remove_day(Self::THURSDAY)
  }

  pub fn remove_friday(&mut self) {
    self.remove_day(Self::FRIDAY)
  }

  pub fn remove_saturday(&mut self) {
    self.remove_day(Self::SATURDAY)
  }

  pub fn remove_sunday(&mut self) {
    self.remove_day(Self::SUNDAY)
  }

  pub fn clear(&mut self) {
    self.0 = 0;
  }

  /// Merge the days named in `text` into this set.
  ///
  /// Matching is case-insensitive and purely by substring: any occurrence of
  /// `mon`, `tue`, `wed`, `thu`, `fri`, `sat` or `sun` selects that day, so
  /// `"Mon, tuesday,thu"` and `"MONDAY TUESDAY THURSDAY"` are equivalent.
  /// Days already present are kept.
  ///
  /// Empty text succeeds without changes. Non-empty text naming no day is an
  /// error and leaves the set untouched.
  pub fn parse(&mut self, text: &str) -> Result<(), ParseDaysError> {
    let lower = text.to_lowercase();
    let matched = WEEKDAY_CODES
      .iter()
      .filter(|code| lower.contains(code.abbr()))
      .fold(0u8, |bits, code| bits | code.bit());
    if !text.is_empty() && matched == 0 {
      log::debug!("no day of the week found in {:?}", text);
      return Err(ParseDaysError { text: text.to_string() });
    }
    self.0 |= matched;
    Ok(())
  }

  /// Remove every day named in `text`.
  pub fn parse_remove(&mut self, text: &str) -> Result<(), ParseDaysError> {
    let mut other = WeekdaySet::EMPTY;
    other.parse(text)?;
    self.0 &= !other.0;
    Ok(())
  }

  pub fn equal(self, other: WeekdaySet) -> bool {
    self == other
  }

  /// Single-day members in Monday to Sunday order.
  pub fn days(self) -> impl Iterator<Item = WeekdaySet> {
    WEEKDAY_CODES
      .iter()
      .filter(move |code| self.0 & code.bit() != 0)
      .map(|code| WeekdaySet(code.bit()))
  }

  pub fn day_names(self) -> impl Iterator<Item = &'static str> {
    WEEKDAY_CODES
      .iter()
      .filter(move |code| self.0 & code.bit() != 0)
      .map(|code| code.name())
  }

  /// JSON string scalar of the formatted day list, e.g. `"Monday, Tuesday"`.
  pub fn marshal(&self) -> Vec<u8> {
    serde_json::Value::String(self.to_string()).to_string().into_bytes()
  }

  /// Decode a JSON string scalar and merge the days it names into this set.
  pub fn unmarshal(&mut self, data: &[u8]) -> Result<(), UnmarshalError> {
    let text: String = serde_json::from_slice(data).map_err(|e| {
      log::warn!("day-of-week payload is not a JSON string: {}", e);
      e
    })?;
    self.parse(&text)?;
    Ok(())
  }
}

impl Display for WeekdaySet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (pos, name) in self.day_names().enumerate() {
      if pos > 0 {
        f.write_str(", ")?;
      }
      f.write_str(name)?;
    }
    Ok(())
  }
}

impl FromStr for WeekdaySet {
  type Err = ParseDaysError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut days = WeekdaySet::EMPTY;
    days.parse(s)?;
    Ok(days)
  }
}

impl BitOr for WeekdaySet {
  type Output = WeekdaySet;

  fn bitor(self, rhs: WeekdaySet) -> WeekdaySet {
    WeekdaySet(self.0 | rhs.0)
  }
}

impl BitOrAssign for WeekdaySet {
  fn bitor_assign(&mut self, rhs: WeekdaySet) {
    self.0 |= rhs.0;
  }
}

impl BitAnd for WeekdaySet {
  type Output = WeekdaySet;

  fn bitand(self, rhs: WeekdaySet) -> WeekdaySet {
    WeekdaySet(self.0 & rhs.0)
  }
}

impl From<Weekday> for WeekdaySet {
  fn from(wd: Weekday) -> Self {
    WeekdaySet::from_weekday(wd)
  }
}

impl Serialize for WeekdaySet {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for WeekdaySet {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.parse::<WeekdaySet>().map_err(de::Error::custom)
  }
}
