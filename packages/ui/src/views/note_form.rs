//! Add and edit forms for a note. Both post back to their own URL.

use dioxus::prelude::*;

use api::forms::NoteForm;
use api::ValidationErrors;
use store::NoteId;

use crate::fields::{form_errors, input_field, textarea_field};
use crate::layout::{csrf_input, layout, Chrome};

fn note_form(
    chrome: &Chrome,
    action: &str,
    submit: &str,
    cancel_href: &str,
    form: &NoteForm,
    errors: &ValidationErrors,
) -> Element {
    rsx! {
        form { method: "post", action: "{action}",
            {csrf_input(&chrome.csrf_token)}
            {form_errors(errors)}
            {input_field("Title", "title", "text", &form.title, errors)}
            {textarea_field("Content", "content", &form.content, errors)}
            button { r#type: "submit", "{submit}" }
            " "
            a { href: "{cancel_href}", "Cancel" }
        }
    }
}

pub fn add_note_page(
    chrome: &Chrome,
    username: &str,
    form: &NoteForm,
    errors: &ValidationErrors,
) -> Element {
    let action = format!("/users/{username}/notes/add");
    let cancel = format!("/users/{username}");
    layout(
        chrome,
        "Add note",
        note_form(chrome, &action, "Add", &cancel, form, errors),
    )
}

pub fn update_note_page(
    chrome: &Chrome,
    note_id: NoteId,
    owner_username: &str,
    form: &NoteForm,
    errors: &ValidationErrors,
) -> Element {
    let action = format!("/notes/{note_id}/update");
    let cancel = format!("/users/{owner_username}");
    layout(
        chrome,
        "Edit note",
        note_form(chrome, &action, "Save", &cancel, form, errors),
    )
}
