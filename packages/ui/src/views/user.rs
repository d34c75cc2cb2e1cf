//! Profile page: who the user is and the notes they own.

use dioxus::prelude::*;

use store::{Note, UserProfile};

use crate::layout::{csrf_input, layout, Chrome};

fn note_item(chrome: &Chrome, note: &Note) -> Element {
    let id = note.id;
    let title = &note.title;
    let content = &note.content;
    rsx! {
        li {
            a { href: "/notes/{id}/update", strong { "{title}" } }
            span { "{content}" }
            form { method: "post", action: "/notes/{id}/delete",
                {csrf_input(&chrome.csrf_token)}
                button { class: "danger", r#type: "submit", "Delete" }
            }
        }
    }
}

pub fn user_page(chrome: &Chrome, profile: &UserProfile, notes: &[Note]) -> Element {
    let username = &profile.username;
    let email = &profile.email;
    let full_name = profile.full_name();

    let listing = if notes.is_empty() {
        rsx! { p { "No notes yet." } }
    } else {
        rsx! {
            ul { class: "notes",
                {notes.iter().map(|note| note_item(chrome, note))}
            }
        }
    };

    let content = rsx! {
        dl {
            dt { "Username" }
            dd { "{username}" }
            dt { "Name" }
            dd { "{full_name}" }
            dt { "Email" }
            dd { "{email}" }
        }
        h2 { "Notes" }
        {listing}
        p {
            a { href: "/users/{username}/notes/add", "Add a note" }
        }
        form { method: "post", action: "/users/{username}/delete",
            {csrf_input(&chrome.csrf_token)}
            button { class: "danger", r#type: "submit", "Delete account" }
        }
    };

    layout(chrome, username, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrome() -> Chrome {
        Chrome {
            username: Some("alice".to_string()),
            csrf_token: "tok".to_string(),
            flashes: vec!["Note deleted.".to_string()],
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
        }
    }

    #[test]
    fn test_lists_notes_with_actions() {
        let notes = vec![Note {
            id: 7,
            title: "Groceries".to_string(),
            content: "milk".to_string(),
            owner_username: "alice".to_string(),
        }];
        let html = crate::render(user_page(&chrome(), &profile(), &notes));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Alice Liddell"));
        assert!(html.contains(r#"href="/notes/7/update""#));
        assert!(html.contains(r#"action="/notes/7/delete""#));
        assert!(html.contains(r#"action="/users/alice/delete""#));
        assert!(html.contains(r#"action="/logout""#));
        assert!(html.contains(r#"value="tok""#));
        assert!(html.contains("Note deleted."));
    }

    #[test]
    fn test_escapes_note_text() {
        let notes = vec![Note {
            id: 1,
            title: "<b>bold</b>".to_string(),
            content: "<script>alert(1)</script>".to_string(),
            owner_username: "alice".to_string(),
        }];
        let html = crate::render(user_page(&chrome(), &profile(), &notes));

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_listing() {
        let html = crate::render(user_page(&chrome(), &profile(), &[]));
        assert!(html.contains("No notes yet."));
    }
}
