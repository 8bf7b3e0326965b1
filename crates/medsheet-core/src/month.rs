use chrono::{
  Datelike,
  Duration,
  NaiveDate
};
use serde::{
  Deserialize,
  Serialize
};

/// Direction of one month-navigation
/// step.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum NavDirection {
  Prev,
  Next
}

/// The navigation counter: which
/// calendar month the grid is
/// focused on.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct YearMonth {
  pub year:  i32,
  pub month: u32
}

impl YearMonth {
  #[must_use]
  pub fn new(
    year: i32,
    month: u32
  ) -> Self {
    Self {
      year,
      month: month.clamp(1, 12)
    }
  }

  #[must_use]
  pub fn from_date(
    date: NaiveDate
  ) -> Self {
    Self {
      year:  date.year(),
      month: date.month()
    }
  }

  #[must_use]
  pub fn next(self) -> Self {
    if self.month >= 12 {
      Self {
        year:  self
          .year
          .saturating_add(1),
        month: 1
      }
    } else {
      Self {
        year:  self.year,
        month: self.month + 1
      }
    }
  }

  #[must_use]
  pub fn prev(self) -> Self {
    if self.month <= 1 {
      Self {
        year:  self
          .year
          .saturating_sub(1),
        month: 12
      }
    } else {
      Self {
        year:  self.year,
        month: self.month - 1
      }
    }
  }

  #[must_use]
  pub fn navigate(
    self,
    direction: NavDirection
  ) -> Self {
    match direction {
      | NavDirection::Prev => {
        self.prev()
      }
      | NavDirection::Next => {
        self.next()
      }
    }
  }

  #[must_use]
  pub fn first_day(
    self
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      self.year, self.month, 1
    )
    .unwrap_or(NaiveDate::MIN)
  }

  #[must_use]
  pub fn days(self) -> u32 {
    last_day_of_month(
      self.year, self.month
    )
    .day()
  }

  /// Zero-based weekday index of the
  /// month's first day, Monday = 0
  /// through Sunday = 6.
  #[must_use]
  pub fn first_weekday_offset(
    self
  ) -> u32 {
    self
      .first_day()
      .weekday()
      .num_days_from_monday()
  }

  /// Zero-padded ISO key for one day
  /// of this month, matching the
  /// `date_part` of well-formed
  /// dosing events.
  #[must_use]
  pub fn day_key(
    self,
    day: u32
  ) -> String {
    format!(
      "{:04}-{:02}-{:02}",
      self.year, self.month, day
    )
  }
}

fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  NaiveDate::from_ymd_opt(
    next_year, next_month, 1
  )
  .unwrap_or(NaiveDate::MIN)
  .checked_sub_signed(
    Duration::days(1)
  )
  .unwrap_or(NaiveDate::MIN)
}
