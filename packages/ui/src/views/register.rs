//! Registration form.

use dioxus::prelude::*;

use api::forms::RegisterForm;
use api::ValidationErrors;

use crate::fields::{form_errors, input_field};
use crate::layout::{csrf_input, layout, Chrome};

/// The form is re-rendered with what was submitted, minus the password.
pub fn register_page(chrome: &Chrome, form: &RegisterForm, errors: &ValidationErrors) -> Element {
    let content = rsx! {
        form { method: "post", action: "/register",
            {csrf_input(&chrome.csrf_token)}
            {form_errors(errors)}
            {input_field("Username", "username", "text", &form.username, errors)}
            {input_field("Password", "password", "password", "", errors)}
            {input_field("Email", "email", "email", &form.email, errors)}
            {input_field("First name", "first_name", "text", &form.first_name, errors)}
            {input_field("Last name", "last_name", "text", &form.last_name, errors)}
            button { r#type: "submit", "Register" }
        }
        p {
            "Already have an account? "
            a { href: "/login", "Log in" }
        }
    };
    layout(chrome, "Register", content)
}
