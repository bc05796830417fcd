use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An electable option shown on the ballot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "admin.ts")]
pub struct Candidate {
  pub id: i64,
  pub name: String,
}

/// One row of the admin user list.
///
/// `label` is the display text ("name (dob)" with an optional
/// " (Verified)" suffix); `id` is opaque to the shell and only fed back
/// into verify/ban calls.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "admin.ts")]
pub struct UserListing {
  pub id: i64,
  pub label: String,
}
