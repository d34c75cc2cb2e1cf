use dioxus::prelude::*;

use crate::layout::{layout, Chrome};

pub fn not_found_page(chrome: &Chrome) -> Element {
    let content = rsx! {
        p { "The page you asked for does not exist." }
        a { href: "/", "Back to start" }
    };
    layout(chrome, "Not found", content)
}

pub fn server_error_page() -> Element {
    let content = rsx! {
        p { "Something went wrong on our side. Please try again." }
    };
    layout(&Chrome::default(), "Server error", content)
}
