// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/
pub mod admin;
pub mod db;
pub mod error;
pub mod profile;
pub mod voting;

use db::DbState;
use std::sync::Mutex;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .manage(DbState(Mutex::new(None)))
    .plugin(tauri_plugin_log::Builder::new().build())
    .plugin(tauri_plugin_opener::init())
    .setup(|app| {
      // Open the shared store and seed the demo ballot before any
      // command can run.
      let app_handle = app.handle().clone();
      match db::core::initialize_database(&app_handle) {
        Ok(conn) => {
          if let Err(e) = db::core::seed_demo_candidates(&conn) {
            log::warn!("[setup] Failed to seed demo candidates: {}", e);
          }
          let state = app_handle.state::<DbState>();
          *state.0.lock().unwrap() = Some(conn);
          log::info!("[setup] Database initialized successfully.");
        }
        Err(e) => {
          log::error!("[setup] Failed to initialize database: {}", e);
          panic!("Database initialization failed: {}", e);
        }
      }
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      voting::commands::list_candidates,
      voting::commands::cast_vote,
      voting::commands::list_votes,
      profile::commands::load_profile,
      profile::commands::save_profile,
      admin::commands::admin_list_users,
      admin::commands::admin_verify_user,
      admin::commands::admin_ban_user,
      admin::commands::admin_list_candidates,
      admin::commands::admin_add_candidate,
      admin::commands::admin_delete_candidate,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
