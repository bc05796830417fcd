use once_cell::sync::Lazy;
use rusqlite::{params, Connection};
use rusqlite_migration::{Migrations, M};
use std::path::PathBuf;
use std::sync::Mutex;
use tauri::Manager;

pub struct DbState(pub Mutex<Option<Connection>>);

/// Candidates inserted on first run so the ballot is not empty.
const DEMO_CANDIDATES: [&str; 3] = ["Candidate 1", "Candidate 2", "Candidate 3"];

// Database schema migrations
static MIGRATIONS: Lazy<Migrations<'static>> = Lazy::new(|| {
  Migrations::new(vec![M::up(
    r#"
        -- The single local user. Only id = 1 is ever written by the client;
        -- isVerified is set exclusively by the admin surface.
        CREATE TABLE IF NOT EXISTS profiles (
          id INTEGER PRIMARY KEY,
          name TEXT,
          dob TEXT,
          profilePicture TEXT,
          isVerified BOOLEAN
        );

        -- Electable options shown on the ballot. Names are not unique.
        CREATE TABLE IF NOT EXISTS candidates (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT
        );

        -- Cast ballots. The vote column holds the candidate name at the
        -- time of voting, not a foreign key, so deleting a candidate
        -- leaves its historical votes intact.
        CREATE TABLE IF NOT EXISTS votes (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          vote TEXT
        );
      "#,
  )])
});

fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, String> {
  let app_data_path = app_handle
    .path()
    .app_data_dir()
    .map_err(|e| format!("Could not resolve app data directory: {}", e))?;
  if let Err(e) = std::fs::create_dir_all(&app_data_path) {
    return Err(format!("Failed to create app data directory: {}", e));
  }
  Ok(app_data_path.join("VotingAppDB.sqlite"))
}

/// Opens the SQLite database and runs migrations.
pub fn initialize_database(app_handle: &tauri::AppHandle) -> Result<Connection, String> {
  let db_path = get_db_path(app_handle)?;

  let mut conn =
    Connection::open(&db_path).map_err(|e| format!("Failed to open database connection: {}", e))?;

  log::info!("[db] Applying database migrations...");
  MIGRATIONS.to_latest(&mut conn).map_err(|e| match e {
    rusqlite_migration::Error::RusqliteError { query: _, err } => {
      format!("SQLite error during migration: {}", err)
    }
    rusqlite_migration::Error::MigrationDefinition(def_err) => {
      format!("Migration definition error: {}", def_err)
    }
    other => format!("Unknown migration error: {}", other),
  })?;
  log::info!("[db] Migrations applied successfully.");

  Ok(conn)
}

/// Inserts the demonstration candidates unless a candidate with the same
/// name already exists. There is no uniqueness constraint on names; this
/// check is what keeps repeated startups from duplicating the seed rows.
pub fn seed_demo_candidates(conn: &Connection) -> Result<(), rusqlite::Error> {
  for name in DEMO_CANDIDATES {
    let existing: i64 = conn.query_row(
      "SELECT COUNT(*) FROM candidates WHERE name = ?1",
      params![name],
      |row| row.get(0),
    )?;
    if existing == 0 {
      conn.execute("INSERT INTO candidates (name) VALUES (?1)", params![name])?;
      log::info!("[db] Seeded demo candidate: {}", name);
    }
  }
  Ok(())
}

/// Builds an in-memory store with the production schema applied.
#[cfg(test)]
pub fn open_test_state() -> DbState {
  let mut conn = Connection::open_in_memory().expect("failed to open in-memory database");
  MIGRATIONS
    .to_latest(&mut conn)
    .expect("failed to apply migrations");
  DbState(Mutex::new(Some(conn)))
}
