//! Browser tests for the DOM bindings
//!
//! Run with `wasm-pack test --headless --firefox crates/formguard/wasm`.

use formguard_core::ValidatorConfig;
use formguard_wasm::{install_form_guards_with, validate_form, validate_form_with};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

/// Appends a form with the given class holding one required input
fn append_form(class: &str, value: &str) -> HtmlFormElement {
    let doc = document();
    let form: HtmlFormElement = doc.create_element("form").unwrap().unchecked_into();
    form.set_class_name(class);

    let input: HtmlInputElement = doc.create_element("input").unwrap().unchecked_into();
    input.set_required(true);
    input.set_value(value);
    form.append_child(&input).unwrap();

    body().append_child(&form).unwrap();
    form
}

fn append_input(id: &str, value: &str) -> HtmlInputElement {
    let input: HtmlInputElement = document().create_element("input").unwrap().unchecked_into();
    input.set_id(id);
    input.set_value(value);
    body().append_child(&input).unwrap();
    input
}

/// Dispatches a cancelable submit event, returning it for inspection
fn submit(form: &HtmlFormElement) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
    event
}

fn config_with_marker(marker: &str) -> JsValue {
    let mut config = ValidatorConfig::default();
    config.form_marker = marker.to_string();
    serde_wasm_bindgen::to_value(&config).unwrap()
}

#[wasm_bindgen_test]
fn test_invalid_form_submit_is_cancelled() {
    let form = append_form("guard-invalid", "");
    assert_eq!(install_form_guards_with(config_with_marker("guard-invalid")), Ok(1));

    let event = submit(&form);
    assert!(event.default_prevented());
    assert!(form.class_list().contains("was-validated"));
    body().remove_child(&form).unwrap();
}

#[wasm_bindgen_test]
fn test_valid_form_submit_passes() {
    let form = append_form("guard-valid", "filled in");
    assert_eq!(install_form_guards_with(config_with_marker("guard-valid")), Ok(1));

    let event = submit(&form);
    assert!(!event.default_prevented());
    assert!(form.class_list().contains("was-validated"));
    body().remove_child(&form).unwrap();
}

#[wasm_bindgen_test]
fn test_non_forms_and_late_forms_are_not_guarded() {
    let doc = document();
    let div = doc.create_element("div").unwrap();
    div.set_class_name("guard-mixed");
    body().append_child(&div).unwrap();
    let early = append_form("guard-mixed", "");

    assert_eq!(install_form_guards_with(config_with_marker("guard-mixed")), Ok(1));

    let late = append_form("guard-mixed", "");
    let event = submit(&late);
    assert!(!event.default_prevented());
    assert!(!late.class_list().contains("was-validated"));

    assert!(submit(&early).default_prevented());

    let nodes: [&Node; 3] = [&div, &early, &late];
    for node in nodes {
        body().remove_child(node).unwrap();
    }
}

#[wasm_bindgen_test]
fn test_custom_attempted_class() {
    let form = append_form("guard-custom", "");
    let mut config = ValidatorConfig::default();
    config.form_marker = "guard-custom".to_string();
    config.classes.attempted = "tried".to_string();
    let config = serde_wasm_bindgen::to_value(&config).unwrap();
    assert_eq!(install_form_guards_with(config), Ok(1));

    submit(&form);
    assert!(form.class_list().contains("tried"));
    assert!(!form.class_list().contains("was-validated"));
    body().remove_child(&form).unwrap();
}

#[wasm_bindgen_test]
fn test_validate_form_marks_inputs_and_focuses_first_invalid() {
    let inputs = [
        append_input("modalSignupUsername1", ""),
        append_input("modalSignupMobile", "9876543210"),
        append_input("modalSignupEmail1", "a@b.co"),
        append_input("modalSignupPassword3", "secret"),
    ];

    assert_eq!(validate_form(), Ok(false));
    assert!(inputs[0].class_list().contains("is-invalid"));
    for input in &inputs[1..] {
        assert!(input.class_list().contains("is-valid"));
        assert!(!input.class_list().contains("is-invalid"));
    }
    let active = document().active_element().unwrap();
    assert_eq!(active.id(), "modalSignupUsername1");

    inputs[0].set_value("John Smith");
    assert_eq!(validate_form(), Ok(true));
    assert!(!inputs[0].class_list().contains("is-invalid"));
    assert!(inputs[0].class_list().contains("is-valid"));

    for input in &inputs {
        body().remove_child(input).unwrap();
    }
}

#[wasm_bindgen_test]
fn test_missing_input_throws() {
    let mut config = ValidatorConfig::default();
    config.fields.username = "absentSignupName".to_string();
    let config = serde_wasm_bindgen::to_value(&config).unwrap();
    assert!(validate_form_with(config).is_err());
}
