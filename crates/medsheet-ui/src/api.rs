use gloo::net::http::{Request, Response};
use medsheet_shared::{TimesheetDto, UserDto};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

const API_BASE: &str = "/api";

async fn get_with_credentials(path: &str) -> Result<Response, String> {
    Request::get(&format!("{API_BASE}{path}"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("request to {path} failed: {e}"))
}

async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("decode error: {e}"))
}

fn timesheet_path(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/timesheets/timesheet/{id}"),
        None => "/timesheets/timesheet".to_string(),
    }
}

async fn fetch_timesheet_from(path: &str) -> Result<Option<TimesheetDto>, String> {
    let response = get_with_credentials(path).await?;
    match response.status() {
        200 => decode_body(response).await.map(Some),
        404 => Ok(None),
        status => Err(format!("timesheet service returned {status}")),
    }
}

/// Fetches the caller's active timesheet. `Ok(None)` is the
/// no-active-timesheet state, signalled by a 404.
pub async fn fetch_active_timesheet() -> Result<Option<TimesheetDto>, String> {
    fetch_timesheet_from(&timesheet_path(None)).await
}

/// Fetches one timesheet by id, e.g. a historical one picked off the
/// list screen. `Ok(None)` means the id no longer resolves.
pub async fn fetch_timesheet(id: &str) -> Result<Option<TimesheetDto>, String> {
    fetch_timesheet_from(&timesheet_path(Some(id))).await
}

/// Resolves the signed-in user, if any. A 401 means nobody is signed
/// in; that is a state, not an error.
pub async fn fetch_current_user() -> Result<Option<UserDto>, String> {
    let response = get_with_credentials("/auth/current-user").await?;
    match response.status() {
        200 => decode_body(response).await.map(Some),
        401 => Ok(None),
        status => Err(format!("auth service returned {status}")),
    }
}
