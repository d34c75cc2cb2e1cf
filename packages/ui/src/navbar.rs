use dioxus::prelude::*;

use crate::layout::{csrf_input, Chrome};

pub(crate) fn navbar(chrome: &Chrome) -> Element {
    let links = match chrome.username.as_deref() {
        Some(username) => rsx! {
            a { href: "/users/{username}", "{username}" }
            form { method: "post", action: "/logout",
                {csrf_input(&chrome.csrf_token)}
                button { r#type: "submit", "Log out" }
            }
        },
        None => rsx! {
            a { href: "/register", "Register" }
            a { href: "/login", "Log in" }
        },
    };

    rsx! {
        nav { class: "navbar",
            strong { "Notes" }
            {links}
        }
    }
}
