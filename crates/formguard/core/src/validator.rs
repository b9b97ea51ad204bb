// File: src/validator.rs
// Purpose: The signup validation pass and its report

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ValidatorConfig;
use crate::error::Result;
use crate::field::{FieldName, FieldStatus, FieldValues};
use crate::rules::{FieldRule, RuleViolation};
use crate::surface::FormSurface;

/// Whether a submission may proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Allow,
    Block,
}

impl SubmissionOutcome {
    pub fn permits(&self) -> bool {
        matches!(self, SubmissionOutcome::Allow)
    }
}

/// Result of evaluating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: FieldName,
    pub status: FieldStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<RuleViolation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Aggregate result of a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub outcome: SubmissionOutcome,
    pub fields: Vec<FieldReport>,
    /// Field that received focus after a blocked pass
    pub focused: Option<FieldName>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.outcome.permits()
    }

    pub fn field(&self, field: FieldName) -> Option<&FieldReport> {
        self.fields.iter().find(|r| r.field == field)
    }

    /// First invalid field in declaration order
    pub fn first_invalid(&self) -> Option<FieldName> {
        self.fields
            .iter()
            .find(|r| r.status.is_invalid())
            .map(|r| r.field)
    }
}

/// Validates the four signup fields and decides on submission.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    config: ValidatorConfig,
}

impl FieldValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn rule(&self, field: FieldName) -> FieldRule {
        FieldRule::new(field, self.config.password_min_length)
    }

    /// Evaluates a single value against its field rule
    pub fn evaluate(&self, field: FieldName, value: &str) -> std::result::Result<(), RuleViolation> {
        self.rule(field).evaluate(value)
    }

    /// Evaluates all fields without touching any surface
    pub fn check(&self, values: &FieldValues) -> ValidationReport {
        let fields: Vec<FieldReport> = FieldName::ALL
            .iter()
            .map(|&field| self.report_field(field, values.get(field)))
            .collect();

        let outcome = if fields.iter().any(|r| r.status.is_invalid()) {
            SubmissionOutcome::Block
        } else {
            SubmissionOutcome::Allow
        };

        ValidationReport {
            outcome,
            fields,
            focused: None,
        }
    }

    /// Runs the full pass against a live surface.
    ///
    /// Every field is cleared, evaluated and marked, in declaration order,
    /// even after an earlier field failed. A blocked pass moves focus to the
    /// first field the surface shows as invalid.
    pub fn validate<S: FormSurface + ?Sized>(&self, surface: &mut S) -> Result<ValidationReport> {
        let mut fields = Vec::with_capacity(FieldName::ALL.len());

        for field in FieldName::ALL {
            surface.clear_status(field)?;
            let value = surface.value(field)?;
            let report = self.report_field(field, &value);
            surface.mark(field, report.status)?;
            fields.push(report);
        }

        let mut report = ValidationReport {
            outcome: SubmissionOutcome::Allow,
            fields,
            focused: None,
        };

        if report.fields.iter().any(|r| r.status.is_invalid()) {
            report.outcome = SubmissionOutcome::Block;
            report.focused = self.focus_first_invalid(surface)?;
            info!(
                focused = ?report.focused,
                "signup submission blocked"
            );
        }

        Ok(report)
    }

    fn focus_first_invalid<S: FormSurface + ?Sized>(&self, surface: &mut S) -> Result<Option<FieldName>> {
        for field in FieldName::ALL {
            if surface.status(field)?.is_invalid() {
                surface.focus(field)?;
                return Ok(Some(field));
            }
        }
        Ok(None)
    }

    fn report_field(&self, field: FieldName, value: &str) -> FieldReport {
        match self.evaluate(field, value) {
            Ok(()) => {
                debug!(%field, "field valid");
                FieldReport {
                    field,
                    status: FieldStatus::Valid,
                    violation: None,
                    message: None,
                }
            }
            Err(violation) => {
                debug!(%field, %violation, "field invalid");
                FieldReport {
                    field,
                    status: FieldStatus::Invalid,
                    message: Some(violation.to_string()),
                    violation: Some(violation),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FieldValues {
        FieldValues {
            username: "John Smith".to_string(),
            mobile: "9876543210".to_string(),
            email: "a@b.co".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_check_all_valid() {
        let report = FieldValidator::default().check(&valid_values());
        assert!(report.is_valid());
        assert_eq!(report.first_invalid(), None);
        assert!(report.fields.iter().all(|r| r.status == FieldStatus::Valid));
    }

    #[test]
    fn test_check_reports_every_failure() {
        let values = FieldValues {
            username: "John123".to_string(),
            mobile: "98765".to_string(),
            ..valid_values()
        };
        let report = FieldValidator::default().check(&values);
        assert_eq!(report.outcome, SubmissionOutcome::Block);
        assert_eq!(report.first_invalid(), Some(FieldName::Username));
        assert!(report.field(FieldName::Mobile).unwrap().status.is_invalid());
        assert_eq!(report.field(FieldName::Email).unwrap().status, FieldStatus::Valid);
        assert_eq!(report.focused, None);
    }

    #[test]
    fn test_report_serializes_messages() {
        let values = FieldValues {
            password: "abc".to_string(),
            ..valid_values()
        };
        let report = FieldValidator::default().check(&values);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "block");
        assert_eq!(json["fields"][3]["field"], "password");
        assert_eq!(json["fields"][3]["violation"]["kind"], "tooShort");
        assert_eq!(json["fields"][3]["message"], "Must be at least 6 characters");
        assert!(json["fields"][0].get("violation").is_none());
    }
}
