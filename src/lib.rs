mod catalog;
mod commands;
mod ledger;
mod metrics;
mod models;
mod store;
mod workout;

#[cfg(test)]
mod test_utils;

use catalog::PlanCatalog;
use std::sync::Arc;
use store::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(|app| {
      // Initialize the durable store and bundled plan catalog
      let app_handle = app.handle().clone();
      tauri::async_runtime::block_on(async move {
        match store::initialize_store(&app_handle).await {
          Ok(sqlite) => {
            let catalog = PlanCatalog::load();
            if catalog.is_empty() {
              eprintln!("Plan catalog is empty - calendar will have no plans");
            } else {
              println!("Plan catalog loaded: {} days", catalog.len());
            }

            let state = Arc::new(AppState {
              store: Arc::new(sqlite),
              catalog,
            });
            app_handle.manage(state);
            println!("Store ready");
          }
          Err(e) => {
            // AppState stays unmanaged: every command will error on State
            // access until the app is restarted with a working store
            eprintln!("Failed to initialize store: {}", e);
          }
        }
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      // Plan catalog
      commands::get_day_plan,
      commands::get_calendar_days,
      // Weight ledger
      commands::weight::log_weight,
      commands::weight::get_weight_history,
      commands::weight::get_weight_for_date,
      commands::weight::get_weight_trend,
      // Progress dashboard
      commands::progress::get_progress_summary,
      commands::progress::get_weekly_training_count,
      // Workout checklists
      commands::workout::toggle_exercise,
      commands::workout::get_workout_progress,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
