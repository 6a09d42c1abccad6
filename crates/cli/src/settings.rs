use crate::error::CliError;
use planner::query::dialect::DialectKind;
use serde::Deserialize;

const DEFAULT_LOG_FILTER: &str = "info";

/// Optional defaults read from `--settings`; command-line flags take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dialect: DialectKind,
    pub log: Option<String>,
}

impl Settings {
    pub fn load(path: Option<&str>) -> Result<Settings, CliError> {
        match path {
            Some(path) => {
                let source = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&source)?)
            }
            None => Ok(Settings::default()),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.dialect, DialectKind::Postgres);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_parse_settings() {
        let settings: Settings =
            serde_json::from_str(r#"{ "dialect": "mysql", "log": "planner=debug" }"#).unwrap();
        assert_eq!(settings.dialect, DialectKind::MySql);
        assert_eq!(settings.log_filter(), "planner=debug");
    }
}
