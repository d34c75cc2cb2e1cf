use dioxus::prelude::*;

use api::auth::csrf::CSRF_FIELD;

use crate::navbar::navbar;

const STYLES: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif; color: #37352f; margin: 0; }
main { max-width: 640px; margin: 0 auto; padding: 2rem; }
.navbar { display: flex; gap: 1rem; align-items: center; padding: 0.75rem 2rem; border-bottom: 1px solid #e9e9e7; }
.navbar form { margin-left: auto; }
.flashes { list-style: none; padding: 0.75rem 1rem; background: #fbf3db; border-radius: 4px; }
.field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 1rem; }
.field input, .field textarea { padding: 0.5rem; border: 1px solid #e9e9e7; border-radius: 4px; font-size: 0.9375rem; }
.error { color: #e03e3e; margin: 0; font-size: 0.875rem; }
.notes li { display: flex; gap: 0.75rem; align-items: center; margin-bottom: 0.5rem; }
.danger { background: #e03e3e; color: white; border: none; border-radius: 4px; padding: 0.375rem 0.75rem; cursor: pointer; }
"#;

/// Per-request data every page shows around its content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chrome {
    /// Authenticated username, if any.
    pub username: Option<String>,
    /// Anti-forgery token for the forms on this page.
    pub csrf_token: String,
    /// Notices queued by the previous request.
    pub flashes: Vec<String>,
}

pub(crate) fn layout(chrome: &Chrome, title: &str, content: Element) -> Element {
    let flashes = (!chrome.flashes.is_empty()).then(|| {
        rsx! {
            ul { class: "flashes",
                for message in chrome.flashes.iter() {
                    li { "{message}" }
                }
            }
        }
    });

    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                title { "{title} · Notes" }
                style { "{STYLES}" }
            }
            body {
                {navbar(chrome)}
                main {
                    {flashes}
                    h1 { "{title}" }
                    {content}
                }
            }
        }
    }
}

/// Hidden input carrying the anti-forgery token.
pub(crate) fn csrf_input(token: &str) -> Element {
    rsx! {
        input { r#type: "hidden", name: CSRF_FIELD, value: "{token}" }
    }
}
