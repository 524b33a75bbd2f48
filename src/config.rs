use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Settings read from the environment once `.env` has been loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub api: ApiConfig,
    /// Conversation file loaded into the host view at startup.
    pub conversation_path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base_url = read("TRAINER_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let settings = Self {
            api: ApiConfig {
                base_url,
                api_key: read("TRAINER_API_KEY"),
            },
            conversation_path: read("TRAINER_CONVERSATION").map(PathBuf::from),
        };
        tracing::debug!(
            base_url = %settings.api.base_url,
            has_api_key = settings.api.api_key.is_some(),
            "loaded settings"
        );
        settings
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
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings.api, ApiConfig::default());
        assert!(settings.conversation_path.is_none());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let settings = Settings::from_lookup(lookup(&[("TRAINER_API_URL", "https://trainer.dev/api/")]));
        assert_eq!(settings.api.base_url, "https://trainer.dev/api");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let settings = Settings::from_lookup(lookup(&[
            ("TRAINER_API_KEY", "   "),
            ("TRAINER_CONVERSATION", ""),
        ]));
        assert!(settings.api.api_key.is_none());
        assert!(settings.conversation_path.is_none());
    }

    #[test]
    fn test_reads_all_keys() {
        let settings = Settings::from_lookup(lookup(&[
            ("TRAINER_API_URL", "http://example.test"),
            ("TRAINER_API_KEY", "secret"),
            ("TRAINER_CONVERSATION", "cache/conversation.json"),
        ]));
        assert_eq!(settings.api.base_url, "http://example.test");
        assert_eq!(settings.api.api_key.as_deref(), Some("secret"));
        assert_eq!(
            settings.conversation_path,
            Some(PathBuf::from("cache/conversation.json"))
        );
    }
}
