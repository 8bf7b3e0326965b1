use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

/// Sentinel date key recorded for a
/// dosing stamp whose date segment
/// could not be recovered.
pub const INVALID_DATE: &str =
  "Invalid date";

/// Sentinel time key recorded for a
/// dosing stamp whose time segment
/// could not be recovered.
pub const INVALID_TIME: &str =
  "Invalid time";

/// One scheduled date+time at which
/// a medication is due. The parts
/// come from splitting a raw
/// `YYYY-MM-DDTHH:MM[:SS]` stamp;
/// a malformed stamp degrades to the
/// sentinel pair instead of failing
/// the record.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct DosingEvent {
  pub date_part: String,
  pub time_part: String
}

impl DosingEvent {
  #[must_use]
  pub fn invalid() -> Self {
    Self {
      date_part: INVALID_DATE
        .to_string(),
      time_part: INVALID_TIME
        .to_string()
    }
  }

  #[must_use]
  pub fn is_invalid(&self) -> bool {
    self.date_part == INVALID_DATE
  }
}

/// A medication within a timesheet
/// together with its dosing events.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct MedicationDose {
  pub id:     String,
  pub name:   String,
  pub dosage: String,
  pub advise: String,
  pub events: Vec<DosingEvent>
}

impl MedicationDose {
  /// Fully-typed clone carrying only
  /// the one given event. Agenda
  /// buckets hold these so that a
  /// medication due at several times
  /// on one day appears once per
  /// time slot.
  #[must_use]
  pub fn with_single_event(
    &self,
    event: DosingEvent
  ) -> Self {
    Self {
      id: self.id.clone(),
      name: self.name.clone(),
      dosage: self.dosage.clone(),
      advise: self.advise.clone(),
      events: vec![event]
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub enum TimesheetStatus {
  Active,
  Inactive,
  Expired
}

/// A user's medication schedule over
/// a date range, normalized from the
/// backend payload. Immutable once
/// constructed; month navigation
/// only recomputes derived views.
///
/// Range dates that failed to parse
/// are `None`; nothing below the
/// page header consumes them.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Timesheet {
  pub id:         String,
  pub user_id:    String,
  pub status:     TimesheetStatus,
  pub start_date: Option<NaiveDate>,
  pub end_date:   Option<NaiveDate>,
  pub doses:      Vec<MedicationDose>
}
