use crate::agenda::{
  index_by_day,
  index_by_time
};
use crate::model::{
  MedicationDose,
  Timesheet
};
use crate::month::YearMonth;

/// Fixed month grid size, 6 rows of
/// 7. Five rows cannot hold a 31-day
/// month that starts on a Sunday
/// (offset 6 + 31 days = 37 cells).
pub const MONTH_GRID_CELLS: usize =
  42;

/// The time-ordered agenda of one
/// day: `(time key, medications due
/// at that time)`.
pub type DayAgenda =
  Vec<(String, Vec<MedicationDose>)>;

/// One rendered slot in the month
/// calendar.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum GridCell {
  Empty,
  Day {
    day:    u32,
    agenda: DayAgenda
  }
}

impl GridCell {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    matches!(self, GridCell::Empty)
  }
}

/// Lays one month of the timesheet
/// out on the fixed 42-cell grid:
/// leading blanks for the weekday
/// offset, one day cell per calendar
/// day, trailing blanks to the fixed
/// length.
///
/// `None` is the loading or
/// no-active-timesheet state and
/// produces an all-empty grid; the
/// caller distinguishes the two, not
/// this projection. Recomputed fully
/// on every call, so it is safe on
/// every render or navigation tick.
#[must_use]
pub fn month_grid(
  timesheet: Option<&Timesheet>,
  focus: YearMonth
) -> Vec<GridCell> {
  let mut cells = Vec::with_capacity(
    MONTH_GRID_CELLS
  );

  let Some(timesheet) = timesheet
  else {
    cells.resize(
      MONTH_GRID_CELLS,
      GridCell::Empty
    );
    return cells;
  };

  let days = index_by_day(timesheet);
  let offset =
    focus.first_weekday_offset()
      as usize;

  cells.resize(
    offset,
    GridCell::Empty
  );

  for day in 1..=focus.days() {
    let agenda = days
      .get(&focus.day_key(day))
      .map(|entries| {
        index_by_time(entries)
          .into_iter()
          .collect::<DayAgenda>()
      })
      .unwrap_or_default();
    cells.push(GridCell::Day {
      day,
      agenda
    });
  }

  cells.resize(
    MONTH_GRID_CELLS,
    GridCell::Empty
  );

  tracing::debug!(
    year = focus.year,
    month = focus.month,
    scheduled_days = cells
      .iter()
      .filter(|cell| {
        matches!(
          cell,
          GridCell::Day {
            agenda, ..
          } if !agenda.is_empty()
        )
      })
      .count(),
    "rendered month grid"
  );
  cells
}
