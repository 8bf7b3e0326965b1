use medsheet_core::agenda::invalid_entries;
use medsheet_core::grid::{GridCell, MONTH_GRID_CELLS, month_grid};
use medsheet_core::month::YearMonth;
use medsheet_core::normalize::normalize;
use medsheet_shared::TimesheetDto;

fn backend_payload() -> TimesheetDto {
    serde_json::from_str(
        r#"{
        "id": "6616f0c2a9b3",
        "user_id": "6616ef77a001",
        "status": "ACTIVE",
        "start_date": "2024-03-01",
        "end_date": "2024-03-31",
        "medications": [
            {
                "id": "m-ibu",
                "name": "Ibuprofen",
                "dosage": "200mg",
                "advise": "Take with food",
                "dates": [
                    "2024-03-05T08:00:00",
                    "2024-03-05T20:00:00",
                    "garbage-stamp"
                ]
            },
            {
                "id": "m-amx",
                "name": "Amoxicillin",
                "dosage": "500mg",
                "advise": "Finish the course",
                "dates": ["2024-03-05T08:00:00"]
            }
        ]
    }"#,
    )
    .expect("parse backend payload")
}

#[test]
fn payload_to_month_grid_flow() {
    let timesheet = normalize(&backend_payload());
    let cells = month_grid(Some(&timesheet), YearMonth::new(2024, 3));

    assert_eq!(cells.len(), MONTH_GRID_CELLS);

    // March 2024 starts on a Friday: four leading blanks, the 5th at
    // index 8.
    let GridCell::Day { day, agenda } = &cells[8] else {
        panic!("expected a day cell for March 5");
    };
    assert_eq!(*day, 5);

    // Both 08:00 doses merge under one heading, encounter order kept.
    assert_eq!(agenda.len(), 2);
    assert_eq!(agenda[0].0, "08:00:00");
    assert_eq!(agenda[0].1.len(), 2);
    assert_eq!(agenda[0].1[0].name, "Ibuprofen");
    assert_eq!(agenda[0].1[1].name, "Amoxicillin");
    assert_eq!(agenda[1].0, "20:00:00");
    assert_eq!(agenda[1].1.len(), 1);
}

#[test]
fn malformed_stamp_does_not_poison_the_grid() {
    let timesheet = normalize(&backend_payload());

    assert_eq!(timesheet.doses[0].events.len(), 3);
    assert_eq!(timesheet.doses[0].events[2].date_part, "Invalid date");

    // The sentinel key never matches a calendar day, so the month grid
    // still renders and only carries the valid events.
    let cells = month_grid(Some(&timesheet), YearMonth::new(2024, 3));
    let scheduled: usize = cells
        .iter()
        .filter(|cell| {
            matches!(cell, GridCell::Day { agenda, .. } if !agenda.is_empty())
        })
        .count();
    assert_eq!(scheduled, 1);

    // The malformed stamp is not dropped either: it surfaces in the
    // invalid bucket the view renders below the grid.
    let invalid = invalid_entries(&timesheet);
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].name, "Ibuprofen");
    assert_eq!(invalid[0].events[0].time_part, "Invalid time");
}

#[test]
fn projection_is_idempotent() {
    let timesheet = normalize(&backend_payload());
    let focus = YearMonth::new(2024, 3);

    let first = month_grid(Some(&timesheet), focus);
    let second = month_grid(Some(&timesheet), focus);

    assert_eq!(first, second);
}

#[test]
fn navigation_recomputes_without_refetch() {
    let timesheet = normalize(&backend_payload());
    let focus = YearMonth::new(2024, 3);

    let april = month_grid(Some(&timesheet), focus.next());
    assert!(april.iter().all(|cell| match cell {
        GridCell::Day { agenda, .. } => agenda.is_empty(),
        GridCell::Empty => true,
    }));

    // Coming back lands on the same grid as the first render.
    let back = month_grid(Some(&timesheet), focus.next().prev());
    assert_eq!(back, month_grid(Some(&timesheet), focus));
}
