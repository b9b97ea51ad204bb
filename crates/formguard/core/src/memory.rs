// File: src/memory.rs
// Purpose: In-process form surfaces for tests and non-browser hosts

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::config::ValidatorConfig;
use crate::error::{FormError, Result};
use crate::field::{FieldName, FieldStatus, FieldValues};
use crate::guard::{GuardedForm, SubmitEvent};
use crate::surface::FormSurface;

/// One input element: value plus class list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryInput {
    pub value: String,
    pub classes: BTreeSet<String>,
}

/// A signup form held in memory.
///
/// Inputs are keyed by element id, so a form built with ids that do not
/// match the configuration behaves like a page missing those elements.
#[derive(Debug, Clone)]
pub struct MemoryForm {
    config: ValidatorConfig,
    inputs: BTreeMap<String, MemoryInput>,
    focused: Option<String>,
}

impl MemoryForm {
    /// Empty form with no inputs
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            inputs: BTreeMap::new(),
            focused: None,
        }
    }

    /// Form with all four inputs present and holding `values`
    pub fn with_values(config: ValidatorConfig, values: &FieldValues) -> Self {
        let mut form = Self::new(config);
        for field in FieldName::ALL {
            let id = form.config.fields.id_of(field).to_string();
            form.insert_input(id, values.get(field));
        }
        form
    }

    pub fn insert_input(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(
            id.into(),
            MemoryInput {
                value: value.into(),
                classes: BTreeSet::new(),
            },
        );
    }

    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) -> Result<()> {
        self.input_mut(field)?.value = value.into();
        Ok(())
    }

    /// Adds an arbitrary class, as page markup or other scripts might
    pub fn add_class(&mut self, field: FieldName, class: &str) -> Result<()> {
        self.input_mut(field)?.classes.insert(class.to_string());
        Ok(())
    }

    pub fn classes(&self, field: FieldName) -> Result<&BTreeSet<String>> {
        Ok(&self.input(field)?.classes)
    }

    /// Field that currently holds focus, if any
    pub fn focused(&self) -> Option<FieldName> {
        let id = self.focused.as_deref()?;
        FieldName::ALL
            .into_iter()
            .find(|&f| self.config.fields.id_of(f) == id)
    }

    fn input(&self, field: FieldName) -> Result<&MemoryInput> {
        let id = self.config.fields.id_of(field);
        self.inputs.get(id).ok_or_else(|| {
            warn!(%field, id, "signup input missing");
            FormError::ElementNotFound {
                field,
                id: id.to_string(),
            }
        })
    }

    fn input_mut(&mut self, field: FieldName) -> Result<&mut MemoryInput> {
        let id = self.config.fields.id_of(field);
        match self.inputs.get_mut(id) {
            Some(input) => Ok(input),
            None => {
                warn!(%field, id, "signup input missing");
                Err(FormError::ElementNotFound {
                    field,
                    id: id.to_string(),
                })
            }
        }
    }
}

impl FormSurface for MemoryForm {
    fn value(&self, field: FieldName) -> Result<String> {
        Ok(self.input(field)?.value.clone())
    }

    fn clear_status(&mut self, field: FieldName) -> Result<()> {
        let valid = self.config.classes.valid.clone();
        let invalid = self.config.classes.invalid.clone();
        let input = self.input_mut(field)?;
        input.classes.remove(&valid);
        input.classes.remove(&invalid);
        Ok(())
    }

    fn mark(&mut self, field: FieldName, status: FieldStatus) -> Result<()> {
        let class = match status {
            FieldStatus::Valid => self.config.classes.valid.clone(),
            FieldStatus::Invalid => self.config.classes.invalid.clone(),
            FieldStatus::Unset => return Ok(()),
        };
        self.input_mut(field)?.classes.insert(class);
        Ok(())
    }

    fn status(&self, field: FieldName) -> Result<FieldStatus> {
        let classes = &self.input(field)?.classes;
        let status = if classes.contains(&self.config.classes.invalid) {
            FieldStatus::Invalid
        } else if classes.contains(&self.config.classes.valid) {
            FieldStatus::Valid
        } else {
            FieldStatus::Unset
        };
        Ok(status)
    }

    fn focus(&mut self, field: FieldName) -> Result<()> {
        let id = self.config.fields.id_of(field).to_string();
        self.input(field)?;
        self.focused = Some(id);
        Ok(())
    }
}

/// A guarded form whose native validity is fixed up front
#[derive(Debug, Clone, Default)]
pub struct MemoryGuardedForm {
    pub valid: bool,
    classes: BTreeSet<String>,
}

impl MemoryGuardedForm {
    pub fn new(valid: bool) -> Self {
        Self {
            valid,
            classes: BTreeSet::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }
}

impl GuardedForm for MemoryGuardedForm {
    fn check_validity(&self) -> bool {
        self.valid
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }
}

/// Records what a handler did to the event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySubmitEvent {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl SubmitEvent for MemorySubmitEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
