use std::sync::Arc;

use crate::application::api::Api;
use crate::ports::outbound::PlatformPort;
use crate::state::Platform;

/// Configuration types for the board runner.
pub mod config {
    use anyhow::{bail, Context};

    use crate::infrastructure::http_client::HttpConfig;

    pub const API_URL_ENV: &str = "MERGINGTON_API_URL";
    pub const REQUEST_TIMEOUT_ENV: &str = "MERGINGTON_REQUEST_TIMEOUT_MS";

    pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
    pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        /// Empty on the web build: requests go to the page origin
        pub api_base_url: String,
        pub request_timeout_ms: u64,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                api_base_url: DEFAULT_API_URL.to_string(),
                request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            }
        }
    }

    impl RunnerConfig {
        /// Read the desktop configuration from the process environment
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Build from any key lookup; unset or blank keys take their defaults
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let read = |key: &str| {
                lookup(key)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            };

            let api_base_url = match read(API_URL_ENV) {
                Some(raw) => {
                    let parsed = url::Url::parse(&raw)
                        .with_context(|| format!("{API_URL_ENV} is not a valid URL: {raw}"))?;
                    if !matches!(parsed.scheme(), "http" | "https") {
                        bail!("{API_URL_ENV} must use http or https, got {}", parsed.scheme());
                    }
                    raw
                }
                None => DEFAULT_API_URL.to_string(),
            };

            let request_timeout_ms = match read(REQUEST_TIMEOUT_ENV) {
                Some(raw) => {
                    let ms = raw.parse::<u64>().with_context(|| {
                        format!("{REQUEST_TIMEOUT_ENV} must be a whole number of milliseconds: {raw}")
                    })?;
                    if ms == 0 {
                        bail!("{REQUEST_TIMEOUT_ENV} must be greater than zero");
                    }
                    ms
                }
                None => DEFAULT_REQUEST_TIMEOUT_MS,
            };

            Ok(Self {
                api_base_url,
                request_timeout_ms,
            })
        }

        /// Configuration for the web build, which talks to its own origin
        pub fn for_web() -> Self {
            Self {
                api_base_url: String::new(),
                ..Self::default()
            }
        }

        pub fn http_config(&self) -> HttpConfig {
            HttpConfig::new(self.api_base_url.clone(), self.request_timeout_ms)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn test_defaults_when_unset() {
            let config = RunnerConfig::from_lookup(lookup(&[])).unwrap();
            assert_eq!(config, RunnerConfig::default());
            assert_eq!(config.http_config().base_url, "http://127.0.0.1:8000");
        }

        #[test]
        fn test_reads_both_variables() {
            let config = RunnerConfig::from_lookup(lookup(&[
                (API_URL_ENV, "https://activities.mergington.edu/"),
                (REQUEST_TIMEOUT_ENV, "1500"),
            ]))
            .unwrap();

            assert_eq!(config.request_timeout_ms, 1500);
            // Trailing slash is dropped when building request URLs
            assert_eq!(
                config.http_config().base_url,
                "https://activities.mergington.edu"
            );
        }

        #[test]
        fn test_blank_values_fall_back_to_defaults() {
            let config = RunnerConfig::from_lookup(lookup(&[
                (API_URL_ENV, "  "),
                (REQUEST_TIMEOUT_ENV, ""),
            ]))
            .unwrap();
            assert_eq!(config, RunnerConfig::default());
        }

        #[test]
        fn test_rejects_invalid_url() {
            let err = RunnerConfig::from_lookup(lookup(&[(API_URL_ENV, "not a url")])).unwrap_err();
            assert!(err.to_string().contains(API_URL_ENV));
        }

        #[test]
        fn test_rejects_non_http_scheme() {
            let result = RunnerConfig::from_lookup(lookup(&[(API_URL_ENV, "ftp://example.com")]));
            assert!(result.is_err());
        }

        #[test]
        fn test_rejects_bad_timeout() {
            assert!(RunnerConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_ENV, "soon")])).is_err());
            assert!(RunnerConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_ENV, "0")])).is_err());
        }

        #[test]
        fn test_web_config_uses_relative_paths() {
            let config = RunnerConfig::for_web();
            assert_eq!(config.http_config().base_url, "");
            assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        }
    }
}

pub struct RunnerDeps {
    pub platform: Platform,
    pub api: Api,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { platform, api } = deps;

    // Wrap Platform in Arc<dyn PlatformPort> for UI layer abstraction
    let platform_port: Arc<dyn PlatformPort> = Arc::new(platform);

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title(crate::ui::PAGE_TITLE);
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform_port)
        .with_context(crate::ui::presentation::Services::new(api))
        .launch(crate::ui::app);
}
