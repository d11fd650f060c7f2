use tauri::{AppHandle, Manager};

use crate::{append_shutdown_log, exit_cleanup, BackendState};

// Fired when the last window closes or when AppHandle::exit runs. Both paths
// funnel into stop_backend, which is a no-op once the child is claimed.
pub(crate) fn handle_exit_requested(app_handle: &AppHandle) {
    append_shutdown_log("exit requested");
    stop_managed_backend(app_handle);
}

pub(crate) fn handle_exit_event(app_handle: &AppHandle) {
    stop_managed_backend(app_handle);
    append_shutdown_log("desktop process exiting");
}

fn stop_managed_backend(app_handle: &AppHandle) {
    let state = app_handle.state::<BackendState>();
    exit_cleanup::stop_backend(state.inner(), append_shutdown_log);
}
