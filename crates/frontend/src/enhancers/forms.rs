//! Double-submit protection and blur-time field validation.

use crate::shared::dom;
use contracts::shared::field_validation::{validate_field, FieldError, FieldSpec};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

const FIELD_SELECTOR: &str = ".form-control";
const INVALID_CLASS: &str = "is-invalid";
const FEEDBACK_CLASS: &str = "invalid-feedback";
const PROCESSING_HTML: &str = r#"<span class="spinner me-2"></span>Processing..."#;

/// Returns the number of forms and fields enhanced.
pub fn attach_all(document: &Document) -> (usize, usize) {
    let forms = dom::query_all(document, "form");
    for form in &forms {
        let submitted = form.clone();
        if let Err(e) = dom::listen(form, "submit", move |_| lock_submit_button(&submitted)) {
            log::warn!("form submit hook skipped: {:?}", e);
        }
    }

    let fields = dom::query_all(document, FIELD_SELECTOR);
    for field in &fields {
        let blurred = field.clone();
        let hooked = dom::listen(field, "blur", move |_| validate(&blurred)).and_then(|_| {
            for event in ["input", "focus"] {
                let edited = field.clone();
                dom::listen(field, event, move |_| clear_error(&edited))?;
            }
            Ok(())
        });
        if let Err(e) = hooked {
            log::warn!("field validation skipped: {:?}", e);
        }
    }

    (forms.len(), fields.len())
}

/// Disable the submit button and show a spinner while the browser submits
fn lock_submit_button(form: &Element) {
    let Ok(Some(button)) = form.query_selector(r#"button[type="submit"]"#) else {
        return;
    };
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(true);
    }
    button.set_inner_html(PROCESSING_HTML);
}

/// `type`, `required` and current value of a form control
fn field_state(field: &Element) -> Option<(String, bool, String)> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some((input.type_(), input.required(), input.value()));
    }
    if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        return Some(("textarea".to_string(), area.required(), area.value()));
    }
    field
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| ("select".to_string(), select.required(), select.value()))
}

fn validate(field: &Element) {
    let Some((input_type, required, value)) = field_state(field) else {
        return;
    };
    let spec = FieldSpec {
        input_type: &input_type,
        required,
    };
    match validate_field(spec, &value) {
        Ok(()) => clear_error(field),
        Err(error) => show_error(field, error),
    }
}

fn show_error(field: &Element, error: FieldError) {
    clear_error(field);
    let _ = field.class_list().add_1(INVALID_CLASS);

    let (Some(document), Some(parent)) = (dom::document(), field.parent_element()) else {
        return;
    };
    if let Ok(feedback) = document.create_element("div") {
        feedback.set_class_name(FEEDBACK_CLASS);
        feedback.set_text_content(Some(&error.to_string()));
        let _ = parent.append_child(&feedback);
    }
}

fn clear_error(field: &Element) {
    let _ = field.class_list().remove_1(INVALID_CLASS);
    let Some(parent) = field.parent_element() else {
        return;
    };
    if let Ok(Some(feedback)) = parent.query_selector(&format!(".{}", FEEDBACK_CLASS)) {
        feedback.remove();
    }
}
