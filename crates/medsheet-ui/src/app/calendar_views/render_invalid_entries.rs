fn render_invalid_entries(
  timesheet: Option<&Timesheet>
) -> Html {
  let entries = timesheet
    .map(invalid_entries)
    .unwrap_or_default();
  if entries.is_empty() {
    return html! {};
  }

  html! {
      <div class="calendar-invalid-section">
          <div class="calendar-invalid-heading">{ INVALID_DATE }</div>
          {
              for entries.iter().map(|dose| {
                  let time = dose
                      .events
                      .first()
                      .map(|event| event.time_part.as_str())
                      .unwrap_or(INVALID_TIME);
                  html! {
                      <div class="calendar-dose" title={dose.advise.clone()}>
                          <span class="calendar-time-label">{ format_time_label(time) }</span>
                          <span class="dose-name">{ &dose.name }</span>
                          <span class="dose-dosage">{ &dose.dosage }</span>
                      </div>
                  }
              })
          }
      </div>
  }
}
