use std::process;

use tauri::AppHandle;

use crate::{
    logging::{append_log_line, resolve_desktop_log_path},
    runtime_paths::default_packaged_root_dir,
    DESKTOP_LOG_FILE,
};

pub(crate) fn desktop_log_path() -> std::path::PathBuf {
    resolve_desktop_log_path(default_packaged_root_dir(), DESKTOP_LOG_FILE)
}

pub(crate) fn append_startup_log(message: &str) {
    append_log_line(&desktop_log_path(), "startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log_line(&desktop_log_path(), "desktop", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_log_line(&desktop_log_path(), "shutdown", message);
}

pub(crate) fn fail_startup(message: &str) -> ! {
    eprintln!("PyServe startup failed: {message}");
    append_startup_log(message);
    process::exit(1);
}

pub(crate) fn show_startup_error(app_handle: &AppHandle, message: &str) {
    eprintln!("PyServe startup failed: {message}");
    append_startup_log(message);
    app_handle.exit(1);
}
