use tauri::Manager;

mod pdf;
mod state;

use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let state = AppState::initialize(app.handle().clone());
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            pdf::commands::download_and_share,
            pdf::commands::get_and_share,
            pdf::commands::download_and_open,
            pdf::commands::current_progress
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
