//! formguard WASM
//!
//! WebAssembly bindings for the signup validator.
//! Wire it up with `onsubmit="return validateForm()"`; forms carrying the
//! `needs-validation` class get the generic submit guard at module start.

use formguard_core::{
    FieldName, FieldValidator, FieldValues, GenericFormGuard, ValidationReport, ValidatorConfig,
};
use wasm_bindgen::prelude::*;
use web_sys::{console, Document};

pub mod dom;

use dom::DomForm;

/// Set panic hook and guard the marked forms already on the page
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if let Err(err) = install_form_guards() {
        console::error_2(&JsValue::from_str("formguard: could not install form guards"), &err);
    }
}

/// Validate the signup form with the default element ids and classes
///
/// # Returns
/// `true` when submission may proceed. Throws if a signup input is missing.
///
/// # Example (HTML)
/// ```html
/// <form onsubmit="return validateForm()"> ... </form>
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form() -> Result<bool, JsValue> {
    run_validation(ValidatorConfig::default())
}

/// Validate the signup form with a custom configuration
///
/// # Example (JavaScript)
/// ```javascript
/// validateFormWith({
///     fields: { email: 'signupEmail' },
///     passwordMinLength: 8,
/// });
/// ```
#[wasm_bindgen(js_name = validateFormWith)]
pub fn validate_form_with(config: JsValue) -> Result<bool, JsValue> {
    run_validation(parse_config(config)?)
}

/// Evaluate raw values without touching the page
///
/// # Returns
/// A report object: `{ outcome, fields: [{ field, status, violation?, message? }], focused }`
#[wasm_bindgen(js_name = validateFields)]
pub fn validate_fields(values: JsValue) -> Result<JsValue, JsValue> {
    let values: FieldValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    let report = check_values(&FieldValidator::default(), &values);
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Quick single-field check with the default rules
#[wasm_bindgen(js_name = isValidField)]
pub fn is_valid_field(field: &str, value: &str) -> Result<bool, JsValue> {
    let field: FieldName = field.parse().map_err(|e: String| JsValue::from_str(&e))?;
    Ok(FieldValidator::default().evaluate(field, value).is_ok())
}

/// Guard every form currently carrying the `needs-validation` class
///
/// # Returns
/// Number of forms guarded
#[wasm_bindgen(js_name = installFormGuards)]
pub fn install_form_guards() -> Result<u32, JsValue> {
    let guard = GenericFormGuard::new(&ValidatorConfig::default());
    dom::install_guards(&document()?, &guard)
}

/// Guard marked forms using a custom configuration
///
/// Only `formMarker` and `classes.attempted` matter to the guard.
///
/// # Example (JavaScript)
/// ```javascript
/// installFormGuardsWith({ formMarker: 'js-validate' });
/// ```
#[wasm_bindgen(js_name = installFormGuardsWith)]
pub fn install_form_guards_with(config: JsValue) -> Result<u32, JsValue> {
    let guard = GenericFormGuard::new(&parse_config(config)?);
    dom::install_guards(&document()?, &guard)
}

fn run_validation(config: ValidatorConfig) -> Result<bool, JsValue> {
    let validator = FieldValidator::new(config.clone());
    let mut form = DomForm::new(document()?, config);

    match validator.validate(&mut form) {
        Ok(report) => Ok(report.is_valid()),
        Err(err) => {
            let message = JsValue::from_str(&format!("formguard: {}", err));
            console::error_1(&message);
            Err(message)
        }
    }
}

fn check_values(validator: &FieldValidator, values: &FieldValues) -> ValidationReport {
    validator.check(values)
}

fn parse_config(config: JsValue) -> Result<ValidatorConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ValidatorConfig::default());
    }

    let config: ValidatorConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
    config
        .ensure_usable()
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
    Ok(config)
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("formguard: no document available"))
}
