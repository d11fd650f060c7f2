use std::{fs, path::Path, process::ExitStatus};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const LAST_BACKEND_EXIT_FIELD: &str = "last_backend_exit";

fn empty_state_object() -> Value {
    Value::Object(Map::new())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BackendExitRecord {
    pub(crate) code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) unix_signal: Option<i32>,
    pub(crate) at: String,
}

impl BackendExitRecord {
    pub(crate) fn from_status(status: &ExitStatus) -> Self {
        Self {
            code: status.code(),
            unix_signal: unix_signal_of(status),
            at: chrono::Local::now().to_rfc3339(),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match (self.code, self.unix_signal) {
            (Some(code), _) => format!("exit code {code}"),
            (None, Some(signal)) => format!("signal {signal}"),
            (None, None) => "unknown status".to_string(),
        }
    }
}

#[cfg(unix)]
fn unix_signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;

    status.signal()
}

#[cfg(not(unix))]
fn unix_signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if let Value::Object(map) = value {
        return map;
    }

    *value = empty_state_object();
    // Safe because `value` was just replaced with an object.
    value
        .as_object_mut()
        .expect("value was just normalized into a JSON object")
}

pub(crate) fn record_backend_exit<F>(
    record: &BackendExitRecord,
    state_path: Option<&Path>,
    log: F,
) -> Result<(), String>
where
    F: Fn(&str),
{
    let Some(state_path) = state_path else {
        log("desktop state path is unavailable; skipping backend exit persistence");
        return Ok(());
    };

    if let Some(parent_dir) = state_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create desktop state directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut parsed = match fs::read_to_string(state_path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(error) => {
                log(&format!(
                    "failed to parse desktop state {}: {}. resetting state file",
                    state_path.display(),
                    error
                ));
                empty_state_object()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => empty_state_object(),
        Err(error) => {
            return Err(format!(
                "Failed to read desktop state {}: {}",
                state_path.display(),
                error
            ));
        }
    };
    if !parsed.is_object() {
        log(&format!(
            "desktop state {} has non-object root; resetting state file",
            state_path.display()
        ));
    }
    let object = ensure_object(&mut parsed);

    let record_value = serde_json::to_value(record)
        .map_err(|error| format!("Failed to serialize backend exit record: {error}"))?;
    object.insert(LAST_BACKEND_EXIT_FIELD.to_string(), record_value);

    let serialized = serde_json::to_string_pretty(&parsed)
        .map_err(|error| format!("Failed to serialize desktop state: {error}"))?;
    fs::write(state_path, serialized).map_err(|error| {
        format!(
            "Failed to write desktop state {}: {}",
            state_path.display(),
            error
        )
    })?;

    Ok(())
}

pub(crate) fn read_last_backend_exit(state_path: &Path) -> Option<BackendExitRecord> {
    let raw = fs::read_to_string(state_path).ok()?;
    let parsed: Value = serde_json::from_str(&raw).ok()?;
    let record = parsed.get(LAST_BACKEND_EXIT_FIELD)?;
    serde_json::from_value(record.clone()).ok()
}
