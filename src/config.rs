//! Site Configuration
//!
//! Settings baked in at build time through environment variables
//! (`SITE_BASE_PATH`, `SITE_BREAKPOINT_PX`, `SITE_LOG_LEVEL`).

use std::str::FromStr;

use tracing::Level;

pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Prefix for every asset URL
    pub base_path: String,
    /// Widths at or above this use the side panel
    pub breakpoint_px: f64,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    /// Build from an arbitrary key lookup; unset or unparseable values keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let set = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            base_path: set("SITE_BASE_PATH").unwrap_or(defaults.base_path),
            breakpoint_px: set("SITE_BREAKPOINT_PX")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|px| px.is_finite() && *px > 0.0)
                .unwrap_or(defaults.breakpoint_px),
            log_level: set("SITE_LOG_LEVEL")
                .and_then(|v| Level::from_str(&v).ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Values captured by the compiler from the build environment
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "SITE_BASE_PATH" => option_env!("SITE_BASE_PATH"),
                "SITE_BREAKPOINT_PX" => option_env!("SITE_BREAKPOINT_PX"),
                "SITE_LOG_LEVEL" => option_env!("SITE_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SiteConfig::from_lookup(|_| None), SiteConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_BASE_PATH", "/yabuzuki/"),
            ("SITE_BREAKPOINT_PX", "1024"),
            ("SITE_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.base_path, "/yabuzuki/");
        assert_eq!(config.breakpoint_px, 1024.0);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_BASE_PATH", "  "),
            ("SITE_BREAKPOINT_PX", "wide"),
            ("SITE_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(config, SiteConfig::default());

        let negative = SiteConfig::from_lookup(lookup_from(&[("SITE_BREAKPOINT_PX", "-5")]));
        assert_eq!(negative.breakpoint_px, DEFAULT_BREAKPOINT_PX);
    }
}
