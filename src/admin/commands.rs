use crate::admin::{
  models::{Candidate, UserListing},
  service::AdminService,
};
use crate::db::DbState;
use crate::error::ServiceError;
use tauri::State;

/// List every user profile with its display label
#[tauri::command]
pub fn admin_list_users(db_state: State<DbState>) -> Result<Vec<UserListing>, ServiceError> {
  AdminService::list_users(&db_state)
}

/// Mark a user as verified
#[tauri::command]
pub fn admin_verify_user(db_state: State<DbState>, user_id: i64) -> Result<(), ServiceError> {
  AdminService::verify_user(&db_state, user_id)
}

/// Ban a user by deleting their profile
#[tauri::command]
pub fn admin_ban_user(db_state: State<DbState>, user_id: i64) -> Result<(), ServiceError> {
  AdminService::ban_user(&db_state, user_id)
}

/// List candidates with their row ids for management
#[tauri::command]
pub fn admin_list_candidates(db_state: State<DbState>) -> Result<Vec<Candidate>, ServiceError> {
  AdminService::list_candidates(&db_state)
}

/// Add a new candidate to the ballot
#[tauri::command]
pub fn admin_add_candidate(
  db_state: State<DbState>,
  name: String,
) -> Result<Candidate, ServiceError> {
  AdminService::add_candidate(&db_state, name)
}

/// Remove a candidate from the ballot
#[tauri::command]
pub fn admin_delete_candidate(
  db_state: State<DbState>,
  candidate_id: i64,
) -> Result<(), ServiceError> {
  AdminService::delete_candidate(&db_state, candidate_id)
}
