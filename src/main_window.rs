use tauri::{AppHandle, WebviewUrl, WebviewWindowBuilder};

use crate::{MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH};

pub(crate) fn create_main_window(app_handle: &AppHandle, backend_url: &str) -> Result<(), String> {
    let url = tauri::Url::parse(backend_url)
        .map_err(|error| format!("Invalid backend URL {backend_url}: {error}"))?;

    WebviewWindowBuilder::new(app_handle, MAIN_WINDOW_LABEL, WebviewUrl::External(url))
        .title(MAIN_WINDOW_TITLE)
        .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;

    Ok(())
}

// No menu is configured anywhere; this also drops the macOS default menu.
pub(crate) fn remove_menu_chrome<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = app_handle.remove_menu() {
        log(&format!("failed to remove application menu: {error}"));
    }
}
