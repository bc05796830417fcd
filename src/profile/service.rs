use crate::db::DbState;
use crate::error::ServiceError;
use crate::profile::models::{Profile, PROFILE_ID};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

pub struct ProfileService;

impl ProfileService {
  /// Loads the singleton profile. A missing row is not an error; the
  /// shell gets a default (empty, unverified) profile instead.
  pub fn load_profile(db_state: &DbState) -> Result<Profile, ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    let profile = conn
      .query_row(
        "SELECT id, name, dob, profilePicture, isVerified FROM profiles WHERE id = ?1",
        params![PROFILE_ID],
        |row| {
          Ok(Profile {
            id: row.get(0)?,
            name: row.get(1)?,
            date_of_birth: row.get(2)?,
            profile_picture: row.get(3)?,
            is_verified: row.get(4)?,
          })
        },
      )
      .optional()?;

    Ok(profile.unwrap_or_default())
  }

  /// Overwrites the singleton profile wholesale.
  ///
  /// Saving always writes isVerified = 0: editing a profile resets
  /// verification, and re-verification is an admin action. This is the
  /// existing contract and must stay, surprising as it looks.
  pub fn save_profile(
    db_state: &DbState,
    name: String,
    date_of_birth: NaiveDate,
    profile_picture: String,
  ) -> Result<(), ServiceError> {
    let conn_guard = db_state
      .0
      .lock()
      .map_err(|_| ServiceError::Store("Failed to acquire DB lock".to_string()))?;
    let conn = conn_guard
      .as_ref()
      .ok_or_else(|| ServiceError::Store("Database connection not available.".to_string()))?;

    let dob = date_of_birth.format("%Y-%m-%d").to_string();
    conn.execute(
      "INSERT OR REPLACE INTO profiles (id, name, dob, profilePicture, isVerified)
         VALUES (?1, ?2, ?3, ?4, 0)",
      params![PROFILE_ID, name, dob, profile_picture],
    )?;

    log::info!("[profile] Saved profile for id {}", PROFILE_ID);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::admin::AdminService;
  use crate::db::core::open_test_state;

  fn sample_dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(1815, 12, 10).unwrap()
  }

  #[test]
  fn load_profile_defaults_when_no_row_exists() {
    let state = open_test_state();

    let profile = ProfileService::load_profile(&state).unwrap();
    assert_eq!(profile.id, PROFILE_ID);
    assert!(profile.name.is_empty());
    assert!(profile.date_of_birth.is_empty());
    assert!(!profile.is_verified);
  }

  #[test]
  fn save_profile_round_trips() {
    let state = open_test_state();

    ProfileService::save_profile(
      &state,
      "Ada Lovelace".to_string(),
      sample_dob(),
      "https://example.com/ada.png".to_string(),
    )
    .unwrap();

    let profile = ProfileService::load_profile(&state).unwrap();
    assert_eq!(profile.name, "Ada Lovelace");
    assert_eq!(profile.date_of_birth, "1815-12-10");
    assert_eq!(profile.profile_picture, "https://example.com/ada.png");
    assert!(!profile.is_verified);
  }

  #[test]
  fn saving_always_resets_verification() {
    let state = open_test_state();

    ProfileService::save_profile(
      &state,
      "Ada Lovelace".to_string(),
      sample_dob(),
      String::new(),
    )
    .unwrap();
    AdminService::verify_user(&state, PROFILE_ID).unwrap();
    assert!(ProfileService::load_profile(&state).unwrap().is_verified);

    // Any subsequent save drops the flag again.
    ProfileService::save_profile(
      &state,
      "Ada King".to_string(),
      sample_dob(),
      String::new(),
    )
    .unwrap();
    assert!(!ProfileService::load_profile(&state).unwrap().is_verified);
  }
}
