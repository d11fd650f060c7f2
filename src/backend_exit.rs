use std::{process::ExitStatus, thread};

use tauri::{AppHandle, Manager};

use crate::{
    append_shutdown_log,
    exit_state::{record_backend_exit, BackendExitRecord},
    runtime_paths::{default_packaged_root_dir, desktop_state_path},
    BackendState, EXIT_POLL_INTERVAL,
};

#[derive(Debug)]
pub(crate) enum BackendPoll {
    Running,
    Exited(ExitStatus),
    // Another shutdown path already claimed the child.
    Detached,
}

pub(crate) fn poll_backend(state: &BackendState) -> Result<BackendPoll, String> {
    let mut guard = state
        .child
        .lock()
        .map_err(|_| "Backend process lock poisoned.".to_string())?;
    let Some(child) = guard.as_mut() else {
        return Ok(BackendPoll::Detached);
    };

    match child.try_wait() {
        Ok(Some(status)) => {
            *guard = None;
            Ok(BackendPoll::Exited(status))
        }
        Ok(None) => Ok(BackendPoll::Running),
        Err(error) => Err(format!("Failed to poll backend process status: {error}")),
    }
}

// Signal deaths map to 128 + signal, shell convention.
pub(crate) fn exit_code_for_status(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    signal_exit_code(status)
}

#[cfg(unix)]
fn signal_exit_code(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status.signal().map(|signal| 128 + signal).unwrap_or(1)
}

#[cfg(not(unix))]
fn signal_exit_code(_status: &ExitStatus) -> i32 {
    1
}

pub(crate) fn spawn_exit_watcher(app_handle: AppHandle) {
    thread::spawn(move || loop {
        let state = app_handle.state::<BackendState>();
        match poll_backend(state.inner()) {
            Ok(BackendPoll::Running) => thread::sleep(EXIT_POLL_INTERVAL),
            Ok(BackendPoll::Exited(status)) => {
                let record = BackendExitRecord::from_status(&status);
                append_shutdown_log(&format!(
                    "backend process exited on its own with {}; closing desktop shell",
                    record.describe()
                ));

                let state_path = desktop_state_path(default_packaged_root_dir().as_deref());
                if let Err(error) =
                    record_backend_exit(&record, state_path.as_deref(), append_shutdown_log)
                {
                    append_shutdown_log(&format!(
                        "failed to persist backend exit record: {error}"
                    ));
                }

                app_handle.exit(exit_code_for_status(&status));
                return;
            }
            Ok(BackendPoll::Detached) => return,
            Err(error) => {
                append_shutdown_log(&error);
                return;
            }
        }
    });
}
