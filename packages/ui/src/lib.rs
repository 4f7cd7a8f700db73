//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::{use_user_form, UserFormView};

mod user_list;
pub use user_list::{UserCard, UserList};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;
