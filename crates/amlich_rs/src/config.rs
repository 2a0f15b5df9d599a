//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! timezone_offset_hours = 7.0
//! cache_capacity = 256
//! min_confident_year = 1900
//! max_confident_year = 2100
//! strict = false
//! ```

use std::path::Path;

use amlich_calendar::RangePolicy;
use amlich_time::{VIETNAM_UTC_OFFSET_HOURS, validate_tz};
use serde::Deserialize;

use crate::error::AmlichError;

/// Configuration for a [`Calendar`](crate::Calendar).
///
/// Missing TOML keys take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Local civil time offset from UT, in hours.
    pub timezone_offset_hours: f64,
    /// Number of lunar-year spans kept in the LRU cache; 0 disables it.
    pub cache_capacity: usize,
    pub min_confident_year: i32,
    pub max_confident_year: i32,
    /// Report low-confidence and approximate results as errors.
    pub strict: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone_offset_hours: VIETNAM_UTC_OFFSET_HOURS,
            cache_capacity: 256,
            min_confident_year: 1900,
            max_confident_year: 2100,
            strict: false,
        }
    }
}

impl CalendarConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, AmlichError> {
        let config: Self =
            toml::from_str(content).map_err(|e| AmlichError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, AmlichError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            AmlichError::Config(msg) => {
                AmlichError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn validate(&self) -> Result<(), AmlichError> {
        validate_tz(self.timezone_offset_hours)
            .map_err(|e| AmlichError::Config(e.to_string()))?;
        if self.min_confident_year > self.max_confident_year {
            return Err(AmlichError::Config(
                "min_confident_year must not exceed max_confident_year".to_string(),
            ));
        }
        Ok(())
    }

    pub fn policy(&self) -> RangePolicy {
        RangePolicy::new(self.min_confident_year, self.max_confident_year, self.strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_vietnam() {
        let c = CalendarConfig::default();
        assert_eq!(c.timezone_offset_hours, 7.0);
        assert_eq!(c.cache_capacity, 256);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c = CalendarConfig::from_toml_str("strict = true\ncache_capacity = 0\n").unwrap();
        assert!(c.strict);
        assert_eq!(c.cache_capacity, 0);
        assert_eq!(c.min_confident_year, 1900);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            CalendarConfig::from_toml_str("").unwrap(),
            CalendarConfig::default()
        );
    }

    #[test]
    fn bad_timezone_rejected() {
        let err = CalendarConfig::from_toml_str("timezone_offset_hours = 15.0").unwrap_err();
        assert!(matches!(err, AmlichError::Config(_)));
    }

    #[test]
    fn inverted_range_rejected() {
        let toml = "min_confident_year = 2100\nmax_confident_year = 1900";
        assert!(CalendarConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(CalendarConfig::from_toml_str("timezone = 7").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CalendarConfig::load(Path::new("/nonexistent/amlich.toml")).unwrap_err();
        assert!(matches!(err, AmlichError::Io(_)));
    }
}
