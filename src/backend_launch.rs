use std::process::{Child, Command, Stdio};

use crate::{backend_output::spawn_stderr_pump, BackendState, LaunchPlan};

#[cfg(windows)]
const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

pub(crate) fn start_backend<F>(
    state: &BackendState,
    plan: &LaunchPlan,
    log: F,
) -> Result<u32, String>
where
    F: Fn(&str),
{
    let mut guard = state
        .child
        .lock()
        .map_err(|_| "Backend process lock poisoned.".to_string())?;
    if guard.is_some() {
        return Err("Backend process is already running.".to_string());
    }

    let mut child = spawn_backend(plan)?;
    let pid = child.id();
    match child.stderr.take() {
        Some(stderr) => spawn_stderr_pump(stderr),
        None => log("backend stderr pipe is missing; diagnostics will not be forwarded"),
    }
    *guard = Some(child);

    log(&format!(
        "backend process started (pid {pid}): {:?}",
        plan.debug_command()
    ));
    Ok(pid)
}

fn spawn_backend(plan: &LaunchPlan) -> Result<Child, String> {
    let mut command = Command::new(&plan.cmd);
    command
        .args(&plan.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .env("PYTHONUNBUFFERED", "1");
    if let Some(cwd) = &plan.cwd {
        command.current_dir(cwd);
    }
    apply_detached_mode(&mut command);

    command.spawn().map_err(|error| {
        format!(
            "Failed to spawn backend process with command {:?}: {}",
            plan.debug_command(),
            error
        )
    })
}

// The backend gets its own process group so terminal signals aimed at the
// shell never reach it.
#[cfg(unix)]
fn apply_detached_mode(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    command.process_group(0);
}

#[cfg(windows)]
fn apply_detached_mode(command: &mut Command) {
    use std::os::windows::process::CommandExt;

    command.creation_flags(CREATE_NEW_PROCESS_GROUP | CREATE_NO_WINDOW);
}

#[cfg(not(any(unix, windows)))]
fn apply_detached_mode(_command: &mut Command) {}

#[cfg(all(test, unix))]
mod tests {
    use super::start_backend;
    use crate::{BackendState, LaunchPlan};

    fn shell_plan(script: &str) -> LaunchPlan {
        LaunchPlan {
            cmd: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
            cwd: None,
        }
    }

    #[test]
    fn start_backend_stores_child_and_reports_pid() {
        let state = BackendState::default();
        let pid = start_backend(&state, &shell_plan("sleep 5"), |_| {})
            .expect("backend should start");
        assert!(pid > 0);

        let mut guard = state.child.lock().expect("child lock should work");
        let mut child = guard.take().expect("child should be stored");
        assert_eq!(child.id(), pid);
        child.kill().expect("child should be killable");
        child.wait().expect("child should be waitable");
    }

    #[test]
    fn start_backend_rejects_second_launch_while_running() {
        let state = BackendState::default();
        start_backend(&state, &shell_plan("sleep 5"), |_| {}).expect("backend should start");

        let error = start_backend(&state, &shell_plan("sleep 5"), |_| {})
            .expect_err("second launch should fail");
        assert!(error.contains("already running"));

        let mut guard = state.child.lock().expect("child lock should work");
        let mut child = guard.take().expect("child should be stored");
        child.kill().expect("child should be killable");
        child.wait().expect("child should be waitable");
    }

    #[test]
    fn start_backend_surfaces_spawn_failure() {
        let state = BackendState::default();
        let plan = LaunchPlan {
            cmd: "pyserve-test-missing-binary".to_string(),
            args: vec![],
            cwd: None,
        };

        let error = start_backend(&state, &plan, |_| {}).expect_err("missing binary should fail");
        assert!(error.contains("Failed to spawn backend process"));
        assert!(state
            .child
            .lock()
            .expect("child lock should work")
            .is_none());
    }
}
