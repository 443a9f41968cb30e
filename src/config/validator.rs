//! Configuration validation rules.
//!
//! - `max_history` must be at least 1
//! - `key_prefix` must be non-empty and free of path separators
//! - exclusion entries must be non-empty

use crate::config::schema::RewindConfig;
use crate::error::{Result, RewindError};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &RewindConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.max_history == 0 {
        errors.push(ValidationError::new(
            "max-history",
            "max_history must be at least 1",
        ));
    }

    if config.key_prefix.is_empty() {
        errors.push(ValidationError::new(
            "key-prefix",
            "key_prefix must not be empty",
        ));
    } else if config.key_prefix.contains(['/', '\\']) {
        errors.push(ValidationError::new(
            "key-prefix",
            format!(
                "key_prefix '{}' must not contain path separators",
                config.key_prefix
            ),
        ));
    }

    for key in &config.exclude.keys {
        if key.is_empty() {
            errors.push(ValidationError::new(
                "exclude-key",
                "exclude.keys must not contain empty names",
            ));
        }
    }

    for path in &config.exclude.paths {
        if path.split('.').all(str::is_empty) {
            errors.push(ValidationError::new(
                "exclude-path",
                format!("exclude.paths entry '{}' names no field", path),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &RewindConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(RewindError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RewindConfig::default()).is_empty());
    }

    #[test]
    fn zero_max_history_is_invalid() {
        let config = RewindConfig {
            max_history: 0,
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "max-history"));
    }

    #[test]
    fn prefix_with_separator_is_invalid() {
        let config = RewindConfig {
            key_prefix: "a/b".to_string(),
            ..Default::default()
        };
        assert!(validate_config(&config)
            .iter()
            .any(|e| e.rule == "key-prefix"));
    }

    #[test]
    fn empty_exclusions_are_invalid() {
        let mut config = RewindConfig::default();
        config.exclude.keys.push(String::new());
        config.exclude.paths.push("..".to_string());
        let rules: Vec<_> = validate_config(&config)
            .into_iter()
            .map(|e| e.rule)
            .collect();
        assert!(rules.contains(&"exclude-key".to_string()));
        assert!(rules.contains(&"exclude-path".to_string()));
    }

    #[test]
    fn validate_collects_all_messages() {
        let config = RewindConfig {
            max_history: 0,
            key_prefix: String::new(),
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("max_history"));
        assert!(message.contains("key_prefix"));
    }
}
