use std::{env, path::PathBuf};

use crate::{
    LaunchPlan, BACKEND_CMD_ENV, BACKEND_CWD_ENV, DEFAULT_BACKEND_PROGRAM, DEFAULT_BACKEND_SCRIPT,
};

pub(crate) fn resolve_launch_plan() -> Result<LaunchPlan, String> {
    let custom_cmd = env::var(BACKEND_CMD_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    let cwd = env::var(BACKEND_CWD_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    build_launch_plan(custom_cmd.as_deref(), cwd)
}

fn build_launch_plan(custom_cmd: Option<&str>, cwd: Option<PathBuf>) -> Result<LaunchPlan, String> {
    let Some(custom_cmd) = custom_cmd else {
        return Ok(LaunchPlan {
            cmd: DEFAULT_BACKEND_PROGRAM.to_string(),
            args: vec![DEFAULT_BACKEND_SCRIPT.to_string()],
            cwd,
        });
    };

    let mut parts = shlex::split(custom_cmd)
        .ok_or_else(|| format!("Invalid {BACKEND_CMD_ENV}: {custom_cmd}"))?;
    if parts.is_empty() {
        return Err(format!("{BACKEND_CMD_ENV} is empty."));
    }

    let cmd = parts.remove(0);
    Ok(LaunchPlan {
        cmd,
        args: parts,
        cwd,
    })
}

#[cfg(test)]
mod tests {
    use super::build_launch_plan;
    use std::path::PathBuf;

    #[test]
    fn default_plan_runs_python_server_script() {
        let plan = build_launch_plan(None, None).expect("default plan should resolve");
        assert_eq!(plan.cmd, "python");
        assert_eq!(plan.args, vec!["server.py".to_string()]);
        assert_eq!(plan.cwd, None);
    }

    #[test]
    fn default_plan_keeps_requested_working_directory() {
        let plan = build_launch_plan(None, Some(PathBuf::from("/srv/backend")))
            .expect("default plan should resolve");
        assert_eq!(plan.cwd, Some(PathBuf::from("/srv/backend")));
    }

    #[test]
    fn custom_command_is_split_into_program_and_arguments() {
        let plan = build_launch_plan(Some("python3 -u server.py --port 8080"), None)
            .expect("custom plan should resolve");
        assert_eq!(plan.cmd, "python3");
        assert_eq!(
            plan.args,
            vec![
                "-u".to_string(),
                "server.py".to_string(),
                "--port".to_string(),
                "8080".to_string()
            ]
        );
    }

    #[test]
    fn custom_command_honors_quoted_arguments() {
        let plan = build_launch_plan(Some("python \"my server.py\""), None)
            .expect("quoted plan should resolve");
        assert_eq!(plan.args, vec!["my server.py".to_string()]);
    }

    #[test]
    fn custom_command_with_unbalanced_quote_is_rejected() {
        let error = build_launch_plan(Some("python \"server.py"), None)
            .expect_err("unbalanced quote should fail");
        assert!(error.contains("Invalid PYSERVE_BACKEND_CMD"));
    }

    #[test]
    fn custom_command_without_program_is_rejected() {
        let error =
            build_launch_plan(Some("   "), None).expect_err("blank command should fail");
        assert!(error.contains("PYSERVE_BACKEND_CMD is empty"));
    }
}
