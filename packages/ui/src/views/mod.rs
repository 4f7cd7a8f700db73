mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod user_form;
pub use user_form::{use_user_form, UserFormView};
