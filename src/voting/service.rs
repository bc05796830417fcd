use crate::db::DbState;
use crate::error::ServiceError;
use rusqlite::params;

pub struct VotingService;

impl VotingService {
  /// Candidate names for the ballot, in insertion order. Duplicate names
  /// are listed as-is; the store enforces no uniqueness.
  pub fn list_candidates(db_state: &DbState) -> Result<Vec<String>, ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    let mut stmt = conn.prepare("SELECT name FROM candidates")?;
    let candidates = stmt
      .query_map([], |row| row.get(0))?
      .collect::<Result<Vec<String>, _>>()?;

    Ok(candidates)
  }

  /// Records a vote for the given candidate name.
  ///
  /// The name is stored verbatim; there is no check that it matches an
  /// existing candidate, so a stale ballot entry is accepted as-is.
  pub fn cast_vote(db_state: &DbState, candidate_name: String) -> Result<(), ServiceError> {
    if candidate_name.is_empty() {
      return Err(ServiceError::Validation(
        "You must select a candidate to vote.".to_string(),
      ));
    }

    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    conn.execute(
      "INSERT INTO votes (vote) VALUES (?1)",
      params![candidate_name],
    )?;

    log::info!("[voting] Vote cast for: {}", candidate_name);
    Ok(())
  }

  /// The full vote history as name strings, in insertion order. No tally
  /// is computed anywhere.
  pub fn list_votes(db_state: &DbState) -> Result<Vec<String>, ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    let mut stmt = conn.prepare("SELECT vote FROM votes")?;
    let votes = stmt
      .query_map([], |row| row.get(0))?
      .collect::<Result<Vec<String>, _>>()?;

    Ok(votes)
  }
}
