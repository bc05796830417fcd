use crate::admin::models::{Candidate, UserListing};
use crate::db::DbState;
use crate::error::ServiceError;
use rusqlite::params;

pub struct AdminService;

impl AdminService {
  /// All user profiles as display listings, in store order.
  pub fn list_users(db_state: &DbState) -> Result<Vec<UserListing>, ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    let mut stmt = conn.prepare("SELECT id, name, dob, isVerified FROM profiles")?;
    let users = stmt
      .query_map([], |row| {
        let id: i64 = row.get(0)?;
        let name: String = row.get(1)?;
        let dob: String = row.get(2)?;
        let is_verified: bool = row.get(3)?;

        let mut label = format!("{} ({})", name, dob);
        if is_verified {
          label.push_str(" (Verified)");
        }
        Ok(UserListing { id, label })
      })?
      .collect::<Result<Vec<_>, _>>()?;

    Ok(users)
  }

  /// Marks the profile with the given id as verified.
  ///
  /// A missing id is a silent no-op, indistinguishable from success;
  /// the caller is never told zero rows were touched.
  pub fn verify_user(db_state: &DbState, user_id: i64) -> Result<(), ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    conn.execute(
      "UPDATE profiles SET isVerified = 1 WHERE id = ?1",
      params![user_id],
    )?;

    log::info!("[admin] Verified user: {}", user_id);
    Ok(())
  }

  /// Deletes the profile with the given id. Missing ids are a silent
  /// no-op, same as verify.
  pub fn ban_user(db_state: &DbState, user_id: i64) -> Result<(), ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    conn.execute("DELETE FROM profiles WHERE id = ?1", params![user_id])?;

    log::info!("[admin] Banned user: {}", user_id);
    Ok(())
  }

  /// All candidates with their row ids, in insertion order.
  pub fn list_candidates(db_state: &DbState) -> Result<Vec<Candidate>, ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    let mut stmt = conn.prepare("SELECT id, name FROM candidates")?;
    let candidates = stmt
      .query_map([], |row| {
        Ok(Candidate {
          id: row.get(0)?,
          name: row.get(1)?,
        })
      })?
      .collect::<Result<Vec<_>, _>>()?;

    Ok(candidates)
  }

  /// Adds a candidate and returns it with its assigned row id.
  pub fn add_candidate(db_state: &DbState, name: String) -> Result<Candidate, ServiceError> {
    if name.is_empty() {
      return Err(ServiceError::Validation(
        "Candidate name cannot be empty.".to_string(),
      ));
    }

    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    conn.execute("INSERT INTO candidates (name) VALUES (?1)", params![name])?;
    let id = conn.last_insert_rowid();

    log::info!("[admin] Added candidate: {} ({})", name, id);
    Ok(Candidate { id, name })
  }

  /// Removes a candidate from the ballot. Votes already cast under this
  /// name stay in the history; missing ids are a silent no-op.
  pub fn delete_candidate(db_state: &DbState, candidate_id: i64) -> Result<(), ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    conn.execute("DELETE FROM candidates WHERE id = ?1", params![candidate_id])?;

    log::info!("[admin] Deleted candidate: {}", candidate_id);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::core::open_test_state;
  use crate::profile::{ProfileService, PROFILE_ID};
  use chrono::NaiveDate;

  fn save_sample_profile(state: &crate::db::DbState) {
    ProfileService::save_profile(
      state,
      "Ada Lovelace".to_string(),
      NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
      String::new(),
    )
    .unwrap();
  }

  #[test]
  fn user_labels_include_dob_and_verification_suffix() {
    let state = open_test_state();
    save_sample_profile(&state);

    let users = AdminService::list_users(&state).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, PROFILE_ID);
    assert_eq!(users[0].label, "Ada Lovelace (1815-12-10)");

    AdminService::verify_user(&state, users[0].id).unwrap();
    let users = AdminService::list_users(&state).unwrap();
    assert_eq!(users[0].label, "Ada Lovelace (1815-12-10) (Verified)");
  }

  #[test]
  fn verify_user_is_idempotent() {
    let state = open_test_state();
    save_sample_profile(&state);

    AdminService::verify_user(&state, PROFILE_ID).unwrap();
    AdminService::verify_user(&state, PROFILE_ID).unwrap();

    assert!(ProfileService::load_profile(&state).unwrap().is_verified);
  }

  #[test]
  fn verify_missing_user_is_a_silent_noop() {
    let state = open_test_state();
    save_sample_profile(&state);

    // No error, and the existing row is untouched.
    AdminService::verify_user(&state, 42).unwrap();

    let users = AdminService::list_users(&state).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].label, "Ada Lovelace (1815-12-10)");
  }

  #[test]
  fn ban_user_deletes_the_profile() {
    let state = open_test_state();
    save_sample_profile(&state);

    AdminService::ban_user(&state, PROFILE_ID).unwrap();
    assert!(AdminService::list_users(&state).unwrap().is_empty());

    // Banning again is a no-op, not an error.
    AdminService::ban_user(&state, PROFILE_ID).unwrap();
  }

  #[test]
  fn add_candidate_assigns_increasing_ids() {
    let state = open_test_state();

    let first = AdminService::add_candidate(&state, "Alice".to_string()).unwrap();
    let second = AdminService::add_candidate(&state, "Bob".to_string()).unwrap();
    assert!(second.id > first.id);

    let listed = AdminService::list_candidates(&state).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Alice");
    assert_eq!(listed[1].name, "Bob");
  }

  #[test]
  fn empty_candidate_name_is_rejected() {
    let state = open_test_state();

    let err = AdminService::add_candidate(&state, String::new()).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(AdminService::list_candidates(&state).unwrap().is_empty());
  }

  #[test]
  fn delete_missing_candidate_is_a_silent_noop() {
    let state = open_test_state();

    AdminService::delete_candidate(&state, 7).unwrap();
    assert!(AdminService::list_candidates(&state).unwrap().is_empty());
  }
}
