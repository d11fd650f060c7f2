use std::{
    process::{Child, ExitStatus},
    thread,
    time::Duration,
};

use crate::{
    exit_state::{record_backend_exit, BackendExitRecord},
    process_control,
    runtime_paths::{default_packaged_root_dir, desktop_state_path},
    BackendState, SHUTDOWN_WAIT_ATTEMPTS, SHUTDOWN_WAIT_INTERVAL,
};

// Claims the child out of the shared state, so shutdown and the exit watcher
// can never both signal the same process.
pub(crate) fn stop_backend<F>(state: &BackendState, log: F)
where
    F: Fn(&str),
{
    let child = match state.child.lock() {
        Ok(mut guard) => guard.take(),
        Err(_) => {
            log("backend process lock poisoned; skipping backend shutdown");
            return;
        }
    };
    let Some(child) = child else {
        return;
    };

    log("stopping backend process");
    let Some(status) = stop_child(child, SHUTDOWN_WAIT_ATTEMPTS, SHUTDOWN_WAIT_INTERVAL, &log)
    else {
        log("backend process status is unknown after shutdown");
        return;
    };

    let record = BackendExitRecord::from_status(&status);
    log(&format!("backend process stopped with {}", record.describe()));

    let state_path = desktop_state_path(default_packaged_root_dir().as_deref());
    if let Err(error) = record_backend_exit(&record, state_path.as_deref(), &log) {
        log(&format!("failed to persist backend exit record: {error}"));
    }
}

fn stop_child<F>(
    mut child: Child,
    wait_attempts: usize,
    wait_interval: Duration,
    log: &F,
) -> Option<ExitStatus>
where
    F: Fn(&str),
{
    let pid = child.id();
    if let Err(error) = process_control::terminate_gracefully(pid) {
        log(&format!("graceful backend termination failed: {error}"));
    }

    for _ in 0..wait_attempts {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => thread::sleep(wait_interval),
            Err(error) => {
                log(&format!("failed to poll backend process status: {error}"));
                break;
            }
        }
    }

    log("backend process did not exit after termination request; forcing shutdown");
    if let Err(error) = process_control::force_kill(pid) {
        log(&format!("forced backend termination failed: {error}"));
    }
    let _ = child.kill();
    child.wait().ok()
}
