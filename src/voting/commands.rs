use crate::db::DbState;
use crate::error::ServiceError;
use crate::voting::service::VotingService;
use tauri::State;

/// Get the candidate names to populate the ballot
#[tauri::command]
pub fn list_candidates(db_state: State<DbState>) -> Result<Vec<String>, ServiceError> {
  VotingService::list_candidates(&db_state)
}

/// Submit a vote for the selected candidate
#[tauri::command]
pub fn cast_vote(db_state: State<DbState>, candidate_name: String) -> Result<(), ServiceError> {
  VotingService::cast_vote(&db_state, candidate_name)
}

/// Get the full vote history
#[tauri::command]
pub fn list_votes(db_state: State<DbState>) -> Result<Vec<String>, ServiceError> {
  VotingService::list_votes(&db_state)
}
