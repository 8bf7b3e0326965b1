use chrono::NaiveDate;
use medsheet_shared::{
  MedicationEntryDto,
  TimesheetDto,
  TimesheetStatusDto
};

use crate::model::{
  DosingEvent,
  MedicationDose,
  Timesheet,
  TimesheetStatus
};

/// Converts a raw backend timesheet
/// payload into the in-memory model.
///
/// Medication order and per-entry
/// event order are preserved
/// one-to-one. A malformed dosing
/// stamp degrades to the sentinel
/// event for that index only; it is
/// logged and never surfaced as an
/// error.
#[must_use]
pub fn normalize(
  raw: &TimesheetDto
) -> Timesheet {
  let doses = raw
    .medications
    .iter()
    .map(normalize_entry)
    .collect::<Vec<_>>();

  tracing::debug!(
    timesheet = %raw.id,
    medications = doses.len(),
    "normalized timesheet"
  );

  Timesheet {
    id: raw.id.clone(),
    user_id: raw.user_id.clone(),
    status: normalize_status(
      raw.status
    ),
    start_date: parse_range_date(
      &raw.start_date,
      "start_date"
    ),
    end_date: parse_range_date(
      &raw.end_date,
      "end_date"
    ),
    doses
  }
}

fn normalize_entry(
  entry: &MedicationEntryDto
) -> MedicationDose {
  let events = entry
    .dates
    .iter()
    .map(|stamp| {
      split_dosing_stamp(
        stamp,
        &entry.id
      )
    })
    .collect::<Vec<_>>();

  MedicationDose {
    id: entry.id.clone(),
    name: entry.name.clone(),
    dosage: entry.dosage.clone(),
    advise: entry.advise.clone(),
    events
  }
}

/// Splits one raw stamp on the
/// `'T'` separator. Either side
/// missing or empty yields the
/// sentinel pair.
fn split_dosing_stamp(
  raw: &str,
  medication_id: &str
) -> DosingEvent {
  if let Some((date_part, time_part)) =
    raw.split_once('T')
    && !date_part.is_empty()
    && !time_part.is_empty()
  {
    return DosingEvent {
      date_part: date_part.to_string(),
      time_part: time_part.to_string()
    };
  }

  tracing::warn!(
    medication = medication_id,
    stamp = raw,
    "malformed dosing stamp; \
     recording sentinel event"
  );
  DosingEvent::invalid()
}

fn normalize_status(
  status: TimesheetStatusDto
) -> TimesheetStatus {
  match status {
    | TimesheetStatusDto::Active => {
      TimesheetStatus::Active
    }
    | TimesheetStatusDto::Inactive => {
      TimesheetStatus::Inactive
    }
    | TimesheetStatusDto::Expired => {
      TimesheetStatus::Expired
    }
  }
}

fn parse_range_date(
  raw: &str,
  field: &str
) -> Option<NaiveDate> {
  match NaiveDate::parse_from_str(
    raw, "%Y-%m-%d"
  ) {
    | Ok(date) => Some(date),
    | Err(error) => {
      tracing::warn!(
        field,
        value = raw,
        %error,
        "unparseable timesheet range \
         date"
      );
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use medsheet_shared::{
    MedicationEntryDto,
    TimesheetDto,
    TimesheetStatusDto
  };

  use super::normalize;
  use crate::model::{
    INVALID_DATE,
    INVALID_TIME
  };

  fn entry(
    id: &str,
    dates: &[&str]
  ) -> MedicationEntryDto {
    MedicationEntryDto {
      id:     id.to_string(),
      name:   format!("med-{id}"),
      dosage: "1 tablet".to_string(),
      advise: String::new(),
      dates:  dates
        .iter()
        .map(|d| (*d).to_string())
        .collect()
    }
  }

  fn sheet(
    medications: Vec<
      MedicationEntryDto,
    >
  ) -> TimesheetDto {
    TimesheetDto {
      id: "ts1".to_string(),
      user_id: "u1".to_string(),
      status: TimesheetStatusDto::Active,
      start_date: "2024-03-01"
        .to_string(),
      end_date: "2024-03-31"
        .to_string(),
      medications
    }
  }

  #[test]
  fn preserves_order_and_cardinality()
  {
    let raw = sheet(vec![
      entry(
        "a",
        &[
          "2024-03-05T08:00:00",
          "2024-03-06T20:00:00",
        ],
      ),
      entry("b", &[
        "2024-03-05T12:30:00",
      ]),
    ]);

    let normalized = normalize(&raw);

    assert_eq!(
      normalized.doses.len(),
      2
    );
    assert_eq!(
      normalized.doses[0].id,
      "a"
    );
    assert_eq!(
      normalized.doses[1].id,
      "b"
    );
    assert_eq!(
      normalized.doses[0].events.len(),
      2
    );
    assert_eq!(
      normalized.doses[0].events[1]
        .date_part,
      "2024-03-06"
    );
    assert_eq!(
      normalized.doses[0].events[1]
        .time_part,
      "20:00:00"
    );
  }

  #[test]
  fn malformed_stamp_degrades_locally()
  {
    let raw = sheet(vec![entry(
      "a",
      &[
        "2024-03-05T08:00:00",
        "not-a-date",
        "2024-03-07T09:15:00",
      ],
    )]);

    let normalized = normalize(&raw);
    let events =
      &normalized.doses[0].events;

    assert_eq!(events.len(), 3);
    assert_eq!(
      events[1].date_part,
      INVALID_DATE
    );
    assert_eq!(
      events[1].time_part,
      INVALID_TIME
    );
    assert_eq!(
      events[2].date_part,
      "2024-03-07"
    );
  }

  #[test]
  fn empty_segment_is_sentinel() {
    let raw = sheet(vec![entry(
      "a",
      &["2024-03-05T", "T08:00:00"],
    )]);

    let normalized = normalize(&raw);

    for event in
      &normalized.doses[0].events
    {
      assert!(event.is_invalid());
    }
  }

  #[test]
  fn bad_range_dates_become_none() {
    let mut raw = sheet(vec![]);
    raw.start_date =
      "yesterday".to_string();

    let normalized = normalize(&raw);

    assert!(
      normalized.start_date.is_none()
    );
    assert!(
      normalized.end_date.is_some()
    );
  }
}
