use std::process::{Command, Stdio};

#[cfg(unix)]
pub(crate) fn terminate_gracefully(pid: u32) -> Result<(), String> {
    run_kill_command("kill", &["-TERM", &pid.to_string()])
}

#[cfg(windows)]
pub(crate) fn terminate_gracefully(pid: u32) -> Result<(), String> {
    run_kill_command("taskkill", &["/pid", &pid.to_string(), "/t"])
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn terminate_gracefully(_pid: u32) -> Result<(), String> {
    Ok(())
}

#[cfg(unix)]
pub(crate) fn force_kill(pid: u32) -> Result<(), String> {
    run_kill_command("kill", &["-9", &pid.to_string()])
}

#[cfg(windows)]
pub(crate) fn force_kill(pid: u32) -> Result<(), String> {
    run_kill_command("taskkill", &["/pid", &pid.to_string(), "/t", "/f"])
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn force_kill(_pid: u32) -> Result<(), String> {
    Ok(())
}

#[cfg(any(unix, windows))]
fn run_kill_command(program: &str, args: &[&str]) -> Result<(), String> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|error| format!("Failed to run '{program}': {error}"))?;
    if !status.success() {
        return Err(format!("'{program}' returned non-zero status: {status}"));
    }
    Ok(())
}
