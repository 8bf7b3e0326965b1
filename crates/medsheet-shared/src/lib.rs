//! Wire types shared between the
//! frontend and the timesheet
//! service, plus the auth context
//! threaded through the view tree.

use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(
  rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum TimesheetStatusDto {
  #[default]
  Active,
  Inactive,
  Expired
}

/// One medication entry inside a
/// timesheet payload. `name` is
/// joined in by the backend after
/// the fact and may be absent on
/// older records.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct MedicationEntryDto {
  pub id:     String,
  #[serde(default)]
  pub name:   String,
  pub dosage: String,
  pub advise: String,
  pub dates:  Vec<String>
}

/// Raw timesheet payload as served
/// by the timesheet service. Each
/// string in `dates` is expected to
/// be `YYYY-MM-DDTHH:MM[:SS]` but is
/// not guaranteed well-formed.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TimesheetDto {
  pub id:          String,
  pub user_id:     String,
  #[serde(default)]
  pub status:      TimesheetStatusDto,
  pub start_date:  String,
  pub end_date:    String,
  pub medications:
    Vec<MedicationEntryDto>
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
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  Admin,
  User
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct UserDto {
  pub user_id:  String,
  pub username: String,
  pub email:    String,
  pub role:     UserRole
}

/// Identity and role of the signed-in
/// user, passed explicitly to the
/// components that need it. There is
/// no process-wide current-user
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
  pub user_id:  String,
  pub username: String,
  pub role:     UserRole
}

impl AuthContext {
  #[must_use]
  pub fn from_user(
    user: &UserDto
  ) -> Self {
    Self {
      user_id:  user.user_id.clone(),
      username: user.username.clone(),
      role:     user.role
    }
  }

  #[must_use]
  pub fn can_manage_catalog(
    &self
  ) -> bool {
    self.role == UserRole::Admin
  }
}
