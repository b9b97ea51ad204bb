//! `web-sys` implementations of the core surfaces

use formguard_core::error::Result;
use formguard_core::{
    FieldName, FieldStatus, FormError, FormSurface, GenericFormGuard, GuardedForm, SubmitEvent,
    ValidatorConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, HtmlFormElement, HtmlInputElement};

/// The signup inputs, looked up by id on every access
pub struct DomForm {
    document: Document,
    config: ValidatorConfig,
}

impl DomForm {
    pub fn new(document: Document, config: ValidatorConfig) -> Self {
        Self { document, config }
    }

    fn input(&self, field: FieldName) -> Result<HtmlInputElement> {
        let id = self.config.fields.id_of(field);
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| FormError::ElementNotFound {
                field,
                id: id.to_string(),
            })?;

        element
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| FormError::NotAnInput {
                field,
                id: id.to_string(),
            })
    }

    fn class_for(&self, status: FieldStatus) -> Option<&str> {
        match status {
            FieldStatus::Valid => Some(&self.config.classes.valid),
            FieldStatus::Invalid => Some(&self.config.classes.invalid),
            FieldStatus::Unset => None,
        }
    }
}

impl FormSurface for DomForm {
    fn value(&self, field: FieldName) -> Result<String> {
        Ok(self.input(field)?.value())
    }

    fn clear_status(&mut self, field: FieldName) -> Result<()> {
        self.input(field)?
            .class_list()
            .remove_2(&self.config.classes.invalid, &self.config.classes.valid)
            .map_err(dom_error)
    }

    fn mark(&mut self, field: FieldName, status: FieldStatus) -> Result<()> {
        let Some(class) = self.class_for(status) else {
            return Ok(());
        };
        self.input(field)?.class_list().add_1(class).map_err(dom_error)
    }

    fn status(&self, field: FieldName) -> Result<FieldStatus> {
        let classes = self.input(field)?.class_list();
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
        self.input(field)?.focus().map_err(dom_error)
    }
}

/// A `<form>` carrying the guard marker class
pub struct DomGuardedForm(pub HtmlFormElement);

impl GuardedForm for DomGuardedForm {
    fn check_validity(&self) -> bool {
        self.0.check_validity()
    }

    fn add_class(&mut self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            console::warn_2(&JsValue::from_str("formguard: could not add class"), &err);
        }
    }
}

pub struct DomSubmitEvent<'a>(pub &'a Event);

impl SubmitEvent for DomSubmitEvent<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&mut self) {
        self.0.stop_propagation();
    }
}

/// Attaches `guard` to every form currently carrying its marker class.
///
/// Elements that carry the class but are not forms are skipped. Forms
/// inserted later are not picked up. Returns the number of guarded forms.
pub fn install_guards(document: &Document, guard: &GenericFormGuard) -> std::result::Result<u32, JsValue> {
    let nodes = document.query_selector_all(&guard.selector())?;
    let mut installed = 0;

    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(form) = node.dyn_into::<HtmlFormElement>() else {
            continue;
        };

        let guard = guard.clone();
        let target = form.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let mut form = DomGuardedForm(target.clone());
            guard.on_submit(&mut form, &mut DomSubmitEvent(&event));
        });

        form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
        // Listeners live as long as the page
        listener.forget();
        installed += 1;
    }

    Ok(installed)
}

fn dom_error(err: JsValue) -> FormError {
    FormError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
