// File: src/config.rs
// Purpose: Element ids, marker classes and limits, parsed from formguard.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::field::FieldName;
use crate::rules::DEFAULT_PASSWORD_MIN_LENGTH;

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    #[serde(default)]
    pub fields: FieldIds,

    #[serde(default)]
    pub classes: ClassNames,

    /// Class marking forms that get the generic submit guard
    #[serde(default = "default_form_marker", alias = "form_marker")]
    pub form_marker: String,

    #[serde(default = "default_password_min_length", alias = "password_min_length")]
    pub password_min_length: usize,
}

/// Element ids of the signup inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIds {
    #[serde(default = "default_username_id")]
    pub username: String,

    #[serde(default = "default_mobile_id")]
    pub mobile: String,

    #[serde(default = "default_email_id")]
    pub email: String,

    #[serde(default = "default_password_id")]
    pub password: String,
}

/// Visual state classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNames {
    #[serde(default = "default_valid_class")]
    pub valid: String,

    #[serde(default = "default_invalid_class")]
    pub invalid: String,

    /// Added to a guarded form on every submission attempt
    #[serde(default = "default_attempted_class")]
    pub attempted: String,
}

// Default values
fn default_username_id() -> String {
    "modalSignupUsername1".to_string()
}

fn default_mobile_id() -> String {
    "modalSignupMobile".to_string()
}

fn default_email_id() -> String {
    "modalSignupEmail1".to_string()
}

fn default_password_id() -> String {
    "modalSignupPassword3".to_string()
}

fn default_valid_class() -> String {
    "is-valid".to_string()
}

fn default_invalid_class() -> String {
    "is-invalid".to_string()
}

fn default_attempted_class() -> String {
    "was-validated".to_string()
}

fn default_form_marker() -> String {
    "needs-validation".to_string()
}

fn default_password_min_length() -> usize {
    DEFAULT_PASSWORD_MIN_LENGTH
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            fields: FieldIds::default(),
            classes: ClassNames::default(),
            form_marker: default_form_marker(),
            password_min_length: default_password_min_length(),
        }
    }
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            username: default_username_id(),
            mobile: default_mobile_id(),
            email: default_email_id(),
            password: default_password_id(),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            valid: default_valid_class(),
            invalid: default_invalid_class(),
            attempted: default_attempted_class(),
        }
    }
}

impl FieldIds {
    pub fn id_of(&self, field: FieldName) -> &str {
        match field {
            FieldName::Username => &self.username,
            FieldName::Mobile => &self.mobile,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from TOML text; blank text gives the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidatorConfig = toml::from_str(content)?;
        config.ensure_usable()?;
        Ok(config)
    }

    /// Load configuration from default path (./formguard.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formguard.toml")
    }

    /// Rejects settings that would make marking ambiguous
    pub fn ensure_usable(&self) -> Result<()> {
        if self.classes.valid == self.classes.invalid {
            anyhow::bail!(
                "valid and invalid classes must differ (both are '{}')",
                self.classes.valid
            );
        }
        for field in FieldName::ALL {
            if self.fields.id_of(field).trim().is_empty() {
                anyhow::bail!("element id for field {} is empty", field);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.fields.username, "modalSignupUsername1");
        assert_eq!(config.fields.password, "modalSignupPassword3");
        assert_eq!(config.classes.invalid, "is-invalid");
        assert_eq!(config.classes.attempted, "was-validated");
        assert_eq!(config.form_marker, "needs-validation");
        assert_eq!(config.password_min_length, 6);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ValidatorConfig::from_toml_str(
            r#"
            password_min_length = 8

            [fields]
            email = "signupEmail"
            "#,
        )
        .unwrap();
        assert_eq!(config.password_min_length, 8);
        assert_eq!(config.fields.email, "signupEmail");
        assert_eq!(config.fields.mobile, "modalSignupMobile");
        assert_eq!(config.classes.valid, "is-valid");
    }

    #[test]
    fn test_blank_toml_is_default() {
        assert_eq!(
            ValidatorConfig::from_toml_str("  \n").unwrap(),
            ValidatorConfig::default()
        );
    }

    #[test]
    fn test_identical_classes_rejected() {
        let result = ValidatorConfig::from_toml_str(
            r#"
            [classes]
            valid = "state"
            invalid = "state"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = ValidatorConfig::load("does/not/exist/formguard.toml").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }
}
