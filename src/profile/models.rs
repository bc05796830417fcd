use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The application assumes a single local user; every profile read and
/// write targets this row id.
pub const PROFILE_ID: i64 = 1;

/// The local user's identity record.
///
/// `date_of_birth` is stored as ISO "yyyy-MM-dd" text and returned
/// exactly as stored. `is_verified` is an administrative flag, not an
/// authentication mechanism.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "profile.ts")]
pub struct Profile {
  pub id: i64,
  pub name: String,
  pub date_of_birth: String,
  pub profile_picture: String,
  pub is_verified: bool,
}

impl Default for Profile {
  fn default() -> Self {
    Self {
      id: PROFILE_ID,
      name: String::new(),
      date_of_birth: String::new(),
      profile_picture: String::new(),
      is_verified: false,
    }
  }
}
