use std::rc::Rc;

use chrono::{
  NaiveDate,
  Utc
};
use medsheet_core::agenda::invalid_entries;
use medsheet_core::grid::{
  GridCell,
  month_grid
};
use medsheet_core::model::{
  INVALID_DATE,
  INVALID_TIME,
  Timesheet
};
use medsheet_core::month::{
  NavDirection,
  YearMonth
};
use medsheet_core::normalize::normalize;
use medsheet_shared::AuthContext;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::api;
use crate::components::{
  EmptyState,
  ErrorBanner,
  MonthNavActions
};

/// Where the one timesheet fetch
/// currently stands. `Missing` is
/// the no-active-timesheet state and
/// renders a blank grid, not an
/// error.
#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum FetchPhase {
  Loading,
  Ready,
  Missing,
  Failed
}

#[function_component(App)]
pub fn app() -> Html {
  let auth = use_state(|| {
    Option::<AuthContext>::None
  });

  {
    let auth = auth.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::fetch_current_user()
            .await
          {
            | Ok(Some(user)) => {
              auth.set(Some(
                AuthContext::from_user(
                  &user
                ),
              ));
            }
            | Ok(None) => {
              tracing::info!(
                "no signed-in user"
              );
            }
            | Err(error) => {
              tracing::error!(
                %error,
                "failed resolving \
                 current user"
              );
            }
          }
        },
      );
    });
  }

  html! {
      <TimesheetPage auth={(*auth).clone()} />
  }
}

#[derive(Properties, PartialEq)]
pub struct TimesheetPageProps {
  pub auth: Option<AuthContext>,
  /// When set, the page shows this
  /// one timesheet instead of the
  /// caller's active one.
  #[prop_or_default]
  pub timesheet_id: Option<String>
}

#[function_component(TimesheetPage)]
pub fn timesheet_page(
  props: &TimesheetPageProps
) -> Html {
  let phase = use_state(|| {
    FetchPhase::Loading
  });
  let timesheet = use_state(|| {
    Option::<Rc<Timesheet>>::None
  });
  let focus = use_state(|| {
    YearMonth::from_date(
      Utc::now().date_naive()
    )
  });
  // Monotonic fetch sequence; a
  // response is applied only while
  // it is still the latest issued.
  let load_seq =
    use_mut_ref(|| 0_u64);

  let reload = {
    let phase = phase.clone();
    let timesheet = timesheet.clone();
    let load_seq = load_seq.clone();
    let timesheet_id =
      props.timesheet_id.clone();
    Callback::from(move |()| {
      let seq = {
        let mut counter =
          load_seq.borrow_mut();
        *counter += 1;
        *counter
      };
      phase.set(FetchPhase::Loading);

      let phase = phase.clone();
      let timesheet =
        timesheet.clone();
      let load_seq = load_seq.clone();
      let timesheet_id =
        timesheet_id.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result =
            match timesheet_id
              .as_deref()
            {
              | Some(id) => {
                api::fetch_timesheet(
                  id
                )
                .await
              }
              | None => {
                api::fetch_active_timesheet()
                  .await
              }
            };
          if *load_seq.borrow() != seq
          {
            tracing::debug!(
              seq,
              "dropping stale \
               timesheet response"
            );
            return;
          }
          match result {
            | Ok(Some(dto)) => {
              timesheet.set(Some(
                Rc::new(normalize(
                  &dto
                )),
              ));
              phase.set(
                FetchPhase::Ready
              );
            }
            | Ok(None) => {
              timesheet.set(None);
              phase.set(
                FetchPhase::Missing
              );
            }
            | Err(error) => {
              tracing::error!(
                %error,
                "failed loading \
                 timesheet"
              );
              phase.set(
                FetchPhase::Failed
              );
            }
          }
        },
      );
    })
  };

  {
    let reload = reload.clone();
    use_effect_with((), move |_| {
      reload.emit(());
    });
  }

  let on_prev = {
    let focus = focus.clone();
    Callback::from(
      move |_: MouseEvent| {
        focus.set(focus.navigate(
          NavDirection::Prev
        ));
      }
    )
  };
  let on_today = {
    let focus = focus.clone();
    Callback::from(
      move |_: MouseEvent| {
        focus.set(
          YearMonth::from_date(
            Utc::now().date_naive()
          ),
        );
      }
    )
  };
  let on_next = {
    let focus = focus.clone();
    Callback::from(
      move |_: MouseEvent| {
        focus.set(focus.navigate(
          NavDirection::Next
        ));
      }
    )
  };

  let body = match *phase {
    | FetchPhase::Loading => html! {
        <EmptyState message="Loading your timesheet..." />
    },
    | FetchPhase::Failed => {
      let on_retry = reload.clone();
      html! {
          <ErrorBanner
              message="Failed to load timesheet"
              on_retry={on_retry}
          />
      }
    }
    | FetchPhase::Missing => html! {
        <>
            <EmptyState message="You are not currently scheduled to take any medications." />
            { render_month_view(None, *focus) }
        </>
    },
    | FetchPhase::Ready => html! {
        <>
            <div class="timesheet-range">
                { range_label((*timesheet).as_deref()) }
            </div>
            { render_month_view((*timesheet).as_deref(), *focus) }
            { render_invalid_entries((*timesheet).as_deref()) }
        </>
    }
  };

  html! {
      <div class="page timesheet-page">
          <header class="page-header">
              <h1>{ "Timesheet" }</h1>
              { greeting(props.auth.as_ref()) }
          </header>
          <div class="calendar-toolbar">
              <h2 class="month-title">{ month_title(*focus) }</h2>
              <MonthNavActions
                  on_prev={on_prev}
                  on_today={on_today}
                  on_next={on_next}
              />
          </div>
          { body }
      </div>
  }
}

fn greeting(
  auth: Option<&AuthContext>
) -> Html {
  match auth {
    | Some(ctx) => {
      let role_note =
        if ctx.can_manage_catalog() {
          " (catalog admin)"
        } else {
          ""
        };
      html! {
          <span class="greeting">
              { format!("Signed in as {}{role_note}", ctx.username) }
          </span>
      }
    }
    | None => html! {},
  }
}

fn month_title(
  focus: YearMonth
) -> String {
  focus
    .first_day()
    .format("%B %Y")
    .to_string()
}

fn range_label(
  timesheet: Option<&Timesheet>
) -> String {
  let Some(timesheet) = timesheet
  else {
    return String::new();
  };
  format!(
    "{} to {}",
    format_range_date(
      timesheet.start_date
    ),
    format_range_date(
      timesheet.end_date
    )
  )
}

fn format_range_date(
  date: Option<NaiveDate>
) -> String {
  match date {
    | Some(date) => date
      .format("%Y-%m-%d")
      .to_string(),
    | None => "?".to_string()
  }
}

/// Drops the seconds off a
/// well-formed `HH:MM:SS` key;
/// anything else (including the
/// invalid-time sentinel) passes
/// through untouched.
fn format_time_label(
  raw: &str
) -> String {
  match raw.split_once(':') {
    | Some((hh, rest))
      if hh.len() == 2
        && rest.len() == 5
        && rest.as_bytes()[2]
          == b':' =>
    {
      format!("{hh}:{}", &rest[..2])
    }
    | _ => raw.to_string()
  }
}

include!(
  "app/calendar_views/weekday_labels.rs"
);
include!(
  "app/calendar_views/render_month_view.rs"
);
include!(
  "app/calendar_views/render_day_cell.rs"
);
include!(
  "app/calendar_views/render_invalid_entries.rs"
);
