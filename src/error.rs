use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Errors surfaced by the voting, profile, and admin services.
///
/// Every error is terminal for the single operation that raised it;
/// nothing is retried or rolled back. Store messages carry the SQLite
/// error text verbatim so the shell can show it in a dialog.
#[derive(Debug, Clone, PartialEq, Error, Serialize, TS)]
#[serde(tag = "kind", content = "message")]
#[ts(export, export_to = "error.ts")]
pub enum ServiceError {
  /// A required field was empty.
  #[error("{0}")]
  Validation(String),
  /// The underlying store rejected the operation.
  #[error("{0}")]
  Store(String),
}

impl From<rusqlite::Error> for ServiceError {
  fn from(err: rusqlite::Error) -> Self {
    ServiceError::Store(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn errors_serialize_with_kind_and_message() {
    let err = ServiceError::Validation("Candidate name cannot be empty.".to_string());
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "Validation");
    assert_eq!(json["message"], "Candidate name cannot be empty.");
  }

  #[test]
  fn store_errors_carry_the_sqlite_message() {
    let err: ServiceError = rusqlite::Error::ExecuteReturnedResults.into();
    match err {
      ServiceError::Store(msg) => assert!(!msg.is_empty()),
      other => panic!("expected a store error, got {:?}", other),
    }
  }
}
