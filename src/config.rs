//! Application Config
//!
//! Startup settings, overridable from the page URL and shared via the Leptos Context API.
//!
//! Recognized query keys: `log`, `tick` (milliseconds), `topic`, `week1`.
//! Example: `index.html?topic=state&tick=250&log=debug`

use std::time::Duration;

use leptos::prelude::*;
use log::Level;

use crate::models::SubMenu;

const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub log_level: Level,
    /// Period of the timer demo's tick
    pub tick_interval: Duration,
    pub week1_open: bool,
    pub initial_submenu: Option<SubMenu>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            week1_open: true,
            initial_submenu: Some(SubMenu::Jsx),
        }
    }
}

impl AppConfig {
    /// Defaults with overrides from a `location.search` string (leading `?` optional).
    /// Unknown keys and bad values are skipped.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let query = search.strip_prefix('?').unwrap_or(search);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            config.apply(key, value);
        }
        config
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "log" => {
                if let Ok(level) = value.parse::<Level>() {
                    self.log_level = level;
                }
            }
            "tick" => {
                if let Some(ms) = value.parse::<u64>().ok().filter(|ms| *ms > 0) {
                    self.tick_interval = Duration::from_millis(ms);
                }
            }
            "topic" => match value {
                "none" => self.initial_submenu = None,
                other => {
                    if let Some(menu) = SubMenu::from_key(other) {
                        self.initial_submenu = Some(menu);
                    }
                }
            },
            "week1" => match value {
                "open" => self.week1_open = true,
                "closed" => self.week1_open = false,
                _ => {}
            },
            _ => {}
        }
    }

    /// Read the config from the current page URL, falling back to defaults
    pub fn from_window() -> Self {
        let search = web_sys::window().and_then(|win| win.location().search().ok());
        match search {
            Some(search) => Self::from_query(&search),
            None => Self::default(),
        }
    }
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(AppConfig::from_query(""), AppConfig::default());
        assert_eq!(AppConfig::from_query("?"), AppConfig::default());
    }

    #[test]
    fn test_query_overrides() {
        let config = AppConfig::from_query("?log=debug&tick=250&topic=events&week1=closed");
        assert_eq!(config.log_level, Level::Debug);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.initial_submenu, Some(SubMenu::Events));
        assert!(!config.week1_open);
    }

    #[test]
    fn test_topic_none_clears_selection() {
        let config = AppConfig::from_query("topic=none");
        assert_eq!(config.initial_submenu, None);
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = AppConfig::from_query("?log=loud&tick=0&topic=vue&week1=maybe&extra=1&flag");
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_query("tick=-5");
        assert_eq!(config.tick_interval, Duration::from_millis(DEFAULT_TICK_MS));
    }
}
