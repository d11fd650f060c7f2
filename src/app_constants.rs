use std::time::Duration;

pub(crate) const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/index.html";
pub(crate) const DEFAULT_BACKEND_PROGRAM: &str = "python";
pub(crate) const DEFAULT_BACKEND_SCRIPT: &str = "server.py";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "PyServe";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 800.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 600.0;

pub(crate) const BACKEND_URL_ENV: &str = "PYSERVE_BACKEND_URL";
pub(crate) const BACKEND_CMD_ENV: &str = "PYSERVE_BACKEND_CMD";
pub(crate) const BACKEND_CWD_ENV: &str = "PYSERVE_BACKEND_CWD";
pub(crate) const ROOT_DIR_ENV: &str = "PYSERVE_ROOT";

pub(crate) const DESKTOP_LOG_FILE: &str = "pyserve-desktop.log";

pub(crate) const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub(crate) const SHUTDOWN_WAIT_ATTEMPTS: usize = 50;
pub(crate) const SHUTDOWN_WAIT_INTERVAL: Duration = Duration::from_millis(100);
