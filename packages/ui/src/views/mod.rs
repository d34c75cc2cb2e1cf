//! One function per page.

mod error;
mod login;
mod note_form;
mod register;
mod user;

pub use error::{not_found_page, server_error_page};
pub use login::login_page;
pub use note_form::{add_note_page, update_note_page};
pub use register::register_page;
pub use user::user_page;
