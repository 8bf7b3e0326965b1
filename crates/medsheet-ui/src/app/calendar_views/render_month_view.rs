fn render_month_view(
  timesheet: Option<&Timesheet>,
  focus: YearMonth
) -> Html {
  let cells =
    month_grid(timesheet, focus);

  html! {
      <>
          <div class="calendar-weekday-row">
              {
                  for weekday_labels().into_iter().map(|label| html! {
                      <div class="calendar-weekday">{ label }</div>
                  })
              }
          </div>
          <div class="calendar-grid calendar-month-grid">
              {
                  for cells.iter().map(render_day_cell)
              }
          </div>
      </>
  }
}
