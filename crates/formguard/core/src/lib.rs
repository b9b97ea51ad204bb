//! formguard core
//!
//! Signup form validation shared by every host: the field rules, the
//! `FieldValidator` pass that marks fields and decides whether a submission
//! may proceed, and the `GenericFormGuard` that gates marked forms on the
//! platform's own constraint check.
//!
//! Nothing here touches a real DOM. Hosts implement [`FormSurface`],
//! [`GuardedForm`] and [`SubmitEvent`]; the WASM crate does so over `web-sys`,
//! and [`memory`] provides in-process implementations.

pub mod config;
pub mod error;
pub mod field;
pub mod guard;
pub mod memory;
pub mod rules;
pub mod surface;
pub mod validator;

pub use config::{ClassNames, FieldIds, ValidatorConfig};
pub use error::FormError;
pub use field::{FieldName, FieldStatus, FieldValues};
pub use guard::{GenericFormGuard, GuardDecision, GuardedForm, SubmitEvent};
pub use rules::{FieldRule, RuleViolation};
pub use surface::FormSurface;
pub use validator::{FieldReport, FieldValidator, SubmissionOutcome, ValidationReport};
