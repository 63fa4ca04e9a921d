//! Application configuration.
//!
//! Centralized configuration for the pulling program frontend.
//! The backend address can be overridden at build time through the
//! `PULLING_API_URL` environment variable; everything else is fixed.

/// Backend base URL used when `PULLING_API_URL` is absent or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the processing endpoint, relative to the base URL.
pub const PROCESS_PATH: &str = "/process/";

/// Page title.
pub const APP_TITLE: &str = "Generador de Programas de Pulling";

/// File extensions offered by the file picker.
///
/// Client-side filter only, the backend does its own checking.
pub const ACCEPTED_EXTENSIONS: &str = ".xls,.xlsx,.xlsm";

/// Base URL baked in at build time (`PULLING_API_URL=https://... trunk build`).
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("PULLING_API_URL"))
}

/// Pick the configured base URL, falling back to [`DEFAULT_API_URL`].
pub fn resolve_base_url(configured: Option<&str>) -> &str {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_URL,
    }
}

/// Full URL of the processing endpoint for a given base.
pub fn process_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PROCESS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_config_falls_back_to_local_backend() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("")), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some("https://pulling.example.com")), "https://pulling.example.com");
    }

    #[test]
    fn test_process_url_ignores_trailing_slash() {
        assert_eq!(process_url("http://localhost:8000"), "http://localhost:8000/process/");
        assert_eq!(process_url("http://localhost:8000/"), "http://localhost:8000/process/");
        assert_eq!(process_url("https://api.example.com/v1//"), "https://api.example.com/v1/process/");
    }
}
