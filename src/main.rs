#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod backend_config;
mod backend_exit;
mod backend_launch;
mod backend_output;
mod exit_cleanup;
mod exit_events;
mod exit_state;
mod launch_plan;
mod logging;
mod main_window;
mod process_control;
mod runtime_paths;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{
    append_desktop_log, append_shutdown_log, append_startup_log, fail_startup, show_startup_error,
};
pub(crate) use app_types::{BackendState, LaunchPlan};

fn main() {
    app_runtime::run();
}
