use tauri::{Manager, RunEvent};

use crate::{
    append_startup_log, backend_exit, backend_launch, exit_events, exit_state, fail_startup,
    launch_plan, logging, main_window, runtime_paths, show_startup_error, BackendState,
    DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(
            runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));
    log_previous_backend_exit();

    // Backend first; no window exists until setup runs.
    let state = BackendState::default();
    let plan = match launch_plan::resolve_launch_plan() {
        Ok(plan) => plan,
        Err(error) => fail_startup(&error),
    };
    if let Err(error) = backend_launch::start_backend(&state, &plan, append_startup_log) {
        fail_startup(&error);
    }

    tauri::Builder::default()
        .manage(state)
        .setup(|app| {
            let app_handle = app.handle().clone();
            main_window::remove_menu_chrome(&app_handle, append_startup_log);

            let backend_url = app_handle.state::<BackendState>().backend_url.clone();
            if let Err(error) = main_window::create_main_window(&app_handle, &backend_url) {
                show_startup_error(&app_handle, &error);
                return Ok(());
            }
            append_startup_log(&format!("main window created at {backend_url}"));

            backend_exit::spawn_exit_watcher(app_handle);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { .. } => {
                exit_events::handle_exit_requested(app_handle);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            _ => {}
        });
}

fn log_previous_backend_exit() {
    let state_path =
        runtime_paths::desktop_state_path(runtime_paths::default_packaged_root_dir().as_deref());
    let Some(state_path) = state_path else {
        return;
    };

    if let Some(record) = exit_state::read_last_backend_exit(&state_path) {
        append_startup_log(&format!(
            "previous session backend exit: {} at {}",
            record.describe(),
            record.at
        ));
    }
}
