fn render_day_cell(
  cell: &GridCell
) -> Html {
  let GridCell::Day { day, agenda } =
    cell
  else {
    return html! {
        <div class="calendar-day-cell empty"></div>
    };
  };

  html! {
      <div class={classes!("calendar-day-cell", (!agenda.is_empty()).then_some("has-doses"))}>
          <div class="calendar-day-label">{ *day }</div>
          {
              for agenda.iter().map(|(time, doses)| html! {
                  <div class="calendar-time-slot">
                      <span class="calendar-time-label">{ format_time_label(time) }</span>
                      {
                          for doses.iter().map(|dose| html! {
                              <div class="calendar-dose" title={dose.advise.clone()}>
                                  <span class="dose-name">{ &dose.name }</span>
                                  <span class="dose-dosage">{ &dose.dosage }</span>
                              </div>
                          })
                      }
                  </div>
              })
          }
      </div>
  }
}
