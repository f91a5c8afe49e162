use anyhow::{bail, Result};

pub const LOG_ENV: &str = "ROSTERD_LOG";
pub const LOG_FORMAT_ENV: &str = "ROSTERD_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Full,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// `ROSTERD_LOG` wins over `RUST_LOG`; both unset means `info`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref().map(str::trim) {
            None | Some("") | Some("full") => LogFormat::Full,
            Some("compact") => LogFormat::Compact,
            Some(other) => bail!("{LOG_FORMAT_ENV} must be 'full' or 'compact', got '{other}'"),
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = cfg(&[]).expect("config");
        assert_eq!(c.log_filter, "info");
        assert_eq!(c.log_format, LogFormat::Full);
    }

    #[test]
    fn rosterd_log_beats_rust_log() {
        let c = cfg(&[("RUST_LOG", "warn"), ("ROSTERD_LOG", "rosterd=debug")]).expect("config");
        assert_eq!(c.log_filter, "rosterd=debug");
        let c = cfg(&[("RUST_LOG", "warn")]).expect("config");
        assert_eq!(c.log_filter, "warn");
    }

    #[test]
    fn log_format_is_checked() {
        let c = cfg(&[("ROSTERD_LOG_FORMAT", "compact")]).expect("config");
        assert_eq!(c.log_format, LogFormat::Compact);
        assert!(cfg(&[("ROSTERD_LOG_FORMAT", "json")]).is_err());
    }
}
