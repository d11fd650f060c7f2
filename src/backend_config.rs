use std::env;

use url::Url;

use crate::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL};

pub(crate) fn resolve_backend_url() -> String {
    backend_url_from_override(env::var(BACKEND_URL_ENV).ok().as_deref())
}

fn backend_url_from_override(override_value: Option<&str>) -> String {
    match override_value {
        Some(raw) => normalize_backend_url(raw, DEFAULT_BACKEND_URL),
        None => DEFAULT_BACKEND_URL.to_string(),
    }
}

pub(crate) fn normalize_backend_url(raw: &str, default_url: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default_url.to_string();
    }

    match Url::parse(trimmed) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => parsed.to_string(),
            _ => default_url.to_string(),
        },
        Err(_) => default_url.to_string(),
    }
}
