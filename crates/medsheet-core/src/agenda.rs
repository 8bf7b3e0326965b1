use std::collections::BTreeMap;

use crate::model::{
  INVALID_DATE,
  MedicationDose,
  Timesheet
};

/// Groups every dosing event in the
/// timesheet by its date key.
///
/// Keys span the whole timesheet
/// range; the month grid queries the
/// map per day. Each bucket entry is
/// a single-event clone of the
/// owning dose, so a medication due
/// at several times on one day
/// appears once per slot. Bucket
/// order is encounter order; a day
/// with no events has no entry.
#[must_use]
pub fn index_by_day(
  timesheet: &Timesheet
) -> BTreeMap<String, Vec<MedicationDose>>
{
  let mut days: BTreeMap<
    String,
    Vec<MedicationDose>,
  > = BTreeMap::new();

  for dose in &timesheet.doses {
    for event in &dose.events {
      days
        .entry(
          event.date_part.clone()
        )
        .or_default()
        .push(dose.with_single_event(
          event.clone()
        ));
    }
  }

  tracing::debug!(
    timesheet = %timesheet.id,
    days = days.len(),
    "indexed dosing events by day"
  );
  days
}

/// Single-event clones for every
/// sentinel-keyed event, in
/// encounter order.
///
/// The sentinel key matches no
/// calendar day, so these never land
/// on the month grid; the view
/// surfaces them under an "Invalid
/// date" section instead of letting
/// them vanish.
#[must_use]
pub fn invalid_entries(
  timesheet: &Timesheet
) -> Vec<MedicationDose> {
  index_by_day(timesheet)
    .remove(INVALID_DATE)
    .unwrap_or_default()
}

/// Regroups one day's single-event
/// clones by their time key.
///
/// Two medications due at the
/// identical time land in one bucket
/// in encounter order. Iterating the
/// map yields ascending lexical time
/// order, which is chronological for
/// the fixed-width zero-padded
/// `HH:MM[:SS]` keys this system
/// deals in.
#[must_use]
pub fn index_by_time(
  day_entries: &[MedicationDose]
) -> BTreeMap<String, Vec<MedicationDose>>
{
  let mut slots: BTreeMap<
    String,
    Vec<MedicationDose>,
  > = BTreeMap::new();

  for dose in day_entries {
    let Some(event) =
      dose.events.first()
    else {
      continue;
    };
    slots
      .entry(event.time_part.clone())
      .or_default()
      .push(dose.clone());
  }

  slots
}
