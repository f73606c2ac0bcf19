use chrono::{DateTime, Datelike, Local, NaiveDateTime, Weekday};

/// Source of the current moment. `WeekdaySet::today` asks a clock rather than
/// reading the process-wide time so callers can pin it.
pub trait Clock {
  fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> NaiveDateTime {
    Local::now().naive_local()
  }
}

/// Always reports the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
  pub fn from_unixtime(ts: i64) -> Option<Self> {
    unixtime_to_datetime(ts).map(FixedClock)
  }
}

impl Clock for FixedClock {
  fn now(&self) -> NaiveDateTime {
    self.0
  }
}

/*
  Convert a unix timestamp to a UTC NaiveDateTime, None when out of chrono's range
*/
pub fn unixtime_to_datetime(ts: i64) -> Option<NaiveDateTime> {
  DateTime::from_timestamp(ts, 0).map(|dt| dt.naive_utc())
}

/*
  Weekday of a unix timestamp in UTC
*/
pub fn unixtime_to_weekday(ts: i64) -> Option<Weekday> {
  unixtime_to_datetime(ts).map(|dt| dt.weekday())
}
