//! Backend endpoint configuration.

/// Production backend origin used when no override is supplied.
const DEFAULT_API_URL: &str = "https://backend-dz3k.onrender.com/api";

/// Base URL of the backend API.
///
/// Resolved at compile time from `SALETAP_API_URL` so web builds can point a
/// bundle at a staging backend; falls back to the production origin.
pub fn api_base_url() -> &'static str {
    match option_env!("SALETAP_API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_URL,
    }
}

/// Join a path onto a base URL, tolerating a trailing slash on the base.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
