use std::{path::PathBuf, process::Child, sync::Mutex};

use crate::backend_config;

#[derive(Debug)]
pub(crate) struct LaunchPlan {
    pub(crate) cmd: String,
    pub(crate) args: Vec<String>,
    pub(crate) cwd: Option<PathBuf>,
}

impl LaunchPlan {
    pub(crate) fn debug_command(&self) -> Vec<String> {
        let mut parts = vec![self.cmd.clone()];
        parts.extend(self.args.clone());
        parts
    }
}

#[derive(Debug)]
pub(crate) struct BackendState {
    pub(crate) child: Mutex<Option<Child>>,
    pub(crate) backend_url: String,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            child: Mutex::new(None),
            backend_url: backend_config::resolve_backend_url(),
        }
    }
}
