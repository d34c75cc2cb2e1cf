//! Login form.

use dioxus::prelude::*;

use api::forms::LoginForm;
use api::ValidationErrors;

use crate::fields::{form_errors, input_field};
use crate::layout::{csrf_input, layout, Chrome};

pub fn login_page(chrome: &Chrome, form: &LoginForm, errors: &ValidationErrors) -> Element {
    let content = rsx! {
        form { method: "post", action: "/login",
            {csrf_input(&chrome.csrf_token)}
            {form_errors(errors)}
            {input_field("Username", "username", "text", &form.username, errors)}
            {input_field("Password", "password", "password", "", errors)}
            button { r#type: "submit", "Log in" }
        }
        p {
            "New here? "
            a { href: "/register", "Register" }
        }
    };
    layout(chrome, "Log in", content)
}
