use std::{
    env,
    path::{Path, PathBuf},
};

use crate::ROOT_DIR_ENV;

pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    let override_value = env::var(ROOT_DIR_ENV).ok();
    packaged_root_dir_from(override_value.as_deref(), home::home_dir())
}

fn packaged_root_dir_from(
    override_value: Option<&str>,
    home_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(raw) = override_value {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home_dir.map(|home| home.join(".pyserve"))
}

pub(crate) fn desktop_state_path(packaged_root_dir: Option<&Path>) -> Option<PathBuf> {
    packaged_root_dir.map(|root| root.join("data").join("desktop_state.json"))
}
