use dioxus::prelude::*;

use api::ValidationErrors;

fn field_errors(errors: &[String]) -> Element {
    rsx! {
        for error in errors.iter() {
            p { class: "error", "{error}" }
        }
    }
}

/// A labelled `<input>` with its validation messages underneath.
pub(crate) fn input_field(
    label: &str,
    name: &'static str,
    kind: &str,
    value: &str,
    errors: &ValidationErrors,
) -> Element {
    rsx! {
        div { class: "field",
            label { "{label}" }
            input { r#type: "{kind}", name: name, value: "{value}" }
            {field_errors(errors.field(name))}
        }
    }
}

/// A labelled `<textarea>` with its validation messages underneath.
pub(crate) fn textarea_field(
    label: &str,
    name: &'static str,
    value: &str,
    errors: &ValidationErrors,
) -> Element {
    rsx! {
        div { class: "field",
            label { "{label}" }
            textarea { name: name, rows: "8", "{value}" }
            {field_errors(errors.field(name))}
        }
    }
}

/// Errors that belong to the form rather than a single field.
pub(crate) fn form_errors(errors: &ValidationErrors) -> Element {
    field_errors(errors.field("csrf_token"))
}
