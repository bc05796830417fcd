use crate::db::DbState;
use crate::error::ServiceError;
use crate::profile::{models::Profile, service::ProfileService};
use chrono::NaiveDate;
use tauri::State;

/// Get the local user's profile, or an empty one if none was saved yet
#[tauri::command]
pub fn load_profile(db_state: State<DbState>) -> Result<Profile, ServiceError> {
  ProfileService::load_profile(&db_state)
}

/// Save the local user's profile
#[tauri::command]
pub fn save_profile(
  db_state: State<DbState>,
  name: String,
  date_of_birth: NaiveDate,
  profile_picture: String,
) -> Result<(), ServiceError> {
  ProfileService::save_profile(&db_state, name, date_of_birth, profile_picture)
}
