use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

pub(crate) fn resolve_desktop_log_path(
    packaged_root_dir: Option<PathBuf>,
    file_name: &str,
) -> PathBuf {
    match packaged_root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => env::temp_dir().join(file_name),
    }
}

// Best effort: a broken log destination must never take the shell down.
pub(crate) fn append_log_line(path: &Path, scope: &str, message: &str) {
    if let Some(parent_dir) = path.parent() {
        if fs::create_dir_all(parent_dir).is_err() {
            return;
        }
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let line = format!("[{timestamp}] [{scope}] {message}\n");
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::{append_log_line, resolve_desktop_log_path};
    use std::{fs, path::PathBuf};

    #[test]
    fn resolve_desktop_log_path_places_file_under_root_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/opt/shell")), "shell.log");
        assert_eq!(path, PathBuf::from("/opt/shell/logs/shell.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir_without_root() {
        let path = resolve_desktop_log_path(None, "shell.log");
        assert_eq!(path, std::env::temp_dir().join("shell.log"));
    }

    #[test]
    fn append_log_line_creates_file_and_appends_scoped_lines() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let log_path = dir.path().join("logs").join("shell.log");

        append_log_line(&log_path, "startup", "first line");
        append_log_line(&log_path, "shutdown", "second line");

        let contents = fs::read_to_string(&log_path).expect("log file should exist");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[startup] first line"));
        assert!(lines[1].contains("[shutdown] second line"));
        assert!(lines[0].starts_with('['));
        assert!(contents.ends_with('\n'));
    }
}
