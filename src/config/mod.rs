use serde::{Deserialize, Serialize};

const FALLBACK_API_URL: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub api_url: String,
    pub log_level: String,
}

/// Read the first string value among `keys` from the `window.ENV` object.
fn read_env_string(env: &wasm_bindgen::JsValue, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        js_sys::Reflect::get(env, &(*k).into())
            .ok()
            .and_then(|v| v.as_string())
    })
}

impl EnvConfig {
    /// Build a config from raw values; empty values fall back to defaults.
    pub fn resolve(
        api_url: Option<String>,
        log_level: Option<String>,
        page_origin: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };

        let api_url = non_empty(api_url)
            .or_else(|| non_empty(page_origin))
            .unwrap_or_else(|| FALLBACK_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let log_level = non_empty(log_level).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self { api_url, log_level }
    }

    pub fn new() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::resolve(None, None, None);
        };

        let origin = window.location().origin().ok();

        // We support BOTH `window.ENV.API_URL` (documented style) and
        // `window.ENV.api_url` (legacy) for compatibility.
        let (api_url, log_level) = match window.get("ENV") {
            Some(env) if !env.is_undefined() && env.is_object() => (
                read_env_string(&env, &["API_URL", "api_url"]),
                read_env_string(&env, &["LOG_LEVEL", "log_level"]),
            ),
            _ => (None, None),
        };

        Self::resolve(api_url, log_level, origin)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_api_url_wins_over_origin() {
        let c = EnvConfig::resolve(
            Some("https://api.example.com/".to_string()),
            None,
            Some("https://blog.example.com".to_string()),
        );
        assert_eq!(c.api_url, "https://api.example.com");
        assert_eq!(c.log_level, "info");
    }

    #[test]
    fn test_page_origin_is_default_api_url() {
        let c = EnvConfig::resolve(None, None, Some("https://blog.example.com".to_string()));
        assert_eq!(c.api_url, "https://blog.example.com");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let c = EnvConfig::resolve(Some("  ".to_string()), Some(String::new()), None);
        assert_eq!(c.api_url, "http://localhost:3000");
        assert_eq!(c.log_level, "info");
    }

    #[test]
    fn test_log_level_is_kept_verbatim() {
        let c = EnvConfig::resolve(None, Some("blog_editor=debug".to_string()), None);
        assert_eq!(c.log_level, "blog_editor=debug");
    }
}
