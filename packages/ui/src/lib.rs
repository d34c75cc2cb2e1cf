//! This crate contains every page the server renders.
//!
//! Pages are plain functions from view data to a dioxus [`Element`]; nothing
//! here keeps state or runs hooks. [`render`] turns a page into the HTML
//! document sent to the browser, with text and attributes escaped by the
//! renderer.

use dioxus::prelude::*;

mod fields;
mod layout;
mod navbar;
pub mod views;

pub use layout::Chrome;

/// Render a page to a full HTML document.
pub fn render(page: Element) -> String {
    format!("<!DOCTYPE html>{}", dioxus_ssr::render_element(page))
}
