// File: src/guard.rs
// Purpose: Submit guard for forms that opt into native constraint validation

use serde::Serialize;
use tracing::debug;

use crate::config::ValidatorConfig;

/// A form that opted into the generic guard
pub trait GuardedForm {
    /// Runs the platform's constraint validation
    fn check_validity(&self) -> bool;

    fn add_class(&mut self, class: &str);
}

/// The submission event being handled
pub trait SubmitEvent {
    fn prevent_default(&mut self);

    fn stop_propagation(&mut self);
}

/// What the guard did with a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardDecision {
    Passed,
    Cancelled,
}

/// Blocks submission of marked forms whose native constraints fail.
#[derive(Debug, Clone)]
pub struct GenericFormGuard {
    form_marker: String,
    attempted_class: String,
}

impl Default for GenericFormGuard {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

impl GenericFormGuard {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            form_marker: config.form_marker.clone(),
            attempted_class: config.classes.attempted.clone(),
        }
    }

    /// Class that opts a form into the guard
    pub fn form_marker(&self) -> &str {
        &self.form_marker
    }

    /// CSS selector for elements carrying the marker class
    pub fn selector(&self) -> String {
        format!(".{}", self.form_marker)
    }

    /// Handles one submission attempt.
    ///
    /// The attempted class is added whatever the outcome.
    pub fn on_submit<F, E>(&self, form: &mut F, event: &mut E) -> GuardDecision
    where
        F: GuardedForm + ?Sized,
        E: SubmitEvent + ?Sized,
    {
        let decision = if form.check_validity() {
            GuardDecision::Passed
        } else {
            event.prevent_default();
            event.stop_propagation();
            GuardDecision::Cancelled
        };

        form.add_class(&self.attempted_class);
        debug!(?decision, "guarded form submit");
        decision
    }
}
