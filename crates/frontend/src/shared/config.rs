//! Client configuration.
//!
//! An embedded TOML default is parsed at start-up. A full or partial TOML
//! document stored under the `app_config` localStorage key overrides it.

use contracts::system::notifications::NotificationScope;
use leptos::prelude::*;
use serde::Deserialize;

pub const CONFIG_STORAGE_KEY: &str = "app_config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub lists: ListsConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:44396".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListsConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationsConfig {
    pub user_mark_read_delay_ms: u32,
    pub admin_mark_read_delay_ms: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            user_mark_read_delay_ms: 5000,
            admin_mark_read_delay_ms: 10000,
        }
    }
}

impl NotificationsConfig {
    /// Delay between opening the bell menu and marking everything read
    pub fn mark_read_delay_ms(&self, scope: NotificationScope) -> u32 {
        match scope {
            NotificationScope::User => self.user_mark_read_delay_ms,
            NotificationScope::Admin => self.admin_mark_read_delay_ms,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://localhost:44396"

[lists]
default_page_size = 25
page_size_options = [10, 25, 50, 100]

[notifications]
user_mark_read_delay_ms = 5000
admin_mark_read_delay_ms = 10000
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(contents)?;
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config.lists.default_page_size = config.lists.default_page_size.max(1);
    config.lists.page_size_options.retain(|size| *size > 0);
    if config.lists.page_size_options.is_empty() {
        config.lists.page_size_options = ListsConfig::default().page_size_options;
    }
    Ok(config)
}

fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Resolve the active configuration
///
/// Search order:
/// 1. `app_config` entry in localStorage
/// 2. Embedded default
pub fn load_config() -> AppConfig {
    if let Some(contents) = stored_override() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Using configuration from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid {}: {}", CONFIG_STORAGE_KEY, e),
        }
    }

    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration is invalid: {}", e);
            AppConfig::default()
        }
    }
}

/// Configuration provided by `App`
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.lists.default_page_size, 25);
        assert_eq!(config.notifications.mark_read_delay_ms(NotificationScope::User), 5000);
        assert_eq!(config.notifications.mark_read_delay_ms(NotificationScope::Admin), 10000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
            [api]
            base_url = "http://127.0.0.1:5000/"

            [notifications]
            admin_mark_read_delay_ms = 3000
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.lists, ListsConfig::default());
        assert_eq!(config.notifications.user_mark_read_delay_ms, 5000);
        assert_eq!(config.notifications.admin_mark_read_delay_ms, 3000);
    }

    #[test]
    fn test_degenerate_page_sizes_are_repaired() {
        let config = parse_config(
            r#"
            [lists]
            default_page_size = 0
            page_size_options = [0]
            "#,
        )
        .unwrap();
        assert_eq!(config.lists.default_page_size, 1);
        assert_eq!(config.lists.page_size_options, vec![10, 25, 50, 100]);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[api\nbase_url = ").is_err());
    }
}
