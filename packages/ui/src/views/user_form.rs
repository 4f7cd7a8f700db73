//! The user form page: a five-field form above the list of stored users.
//!
//! State lives in a single `Signal<UserForm>` provided as context, so nested
//! components can reach it with [`use_user_form`]. Event handlers call the
//! synchronous `begin_*` transitions, spawn the request, and apply the outcome with
//! the matching `finish_*` call once it resolves.

use api::RestStore;
use dioxus::prelude::*;
use store::form::DELETE_PROMPT;
use store::{Field, FormConfig, UserForm, UserRecord, UserStore};

use crate::{ConfirmDialog, UserList};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Consume the `Signal<UserForm>` provided by [`UserFormView`].
pub fn use_user_form() -> Signal<UserForm> {
    use_context::<Signal<UserForm>>()
}

/// Refresh the mirrored list from the backend.
async fn reload(mut form: Signal<UserForm>, backend: RestStore) {
    let result = backend.list().await;
    form.write().finish_load(result);
}

/// Create, list, edit and delete users against the backend named in `config`.
///
/// The backend client is built once on first render.
#[component]
pub fn UserFormView(config: FormConfig) -> Element {
    let backend = use_hook(|| RestStore::new(&config));
    let mut form = use_context_provider(|| Signal::new(UserForm::new()));

    // Load the list on first display
    let loader_backend = backend.clone();
    let _loader = use_resource(move || reload(form, loader_backend.clone()));

    let submit_backend = backend.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(mutation) = form.write().begin_submit() else {
            return;
        };
        tracing::info!(update = mutation.is_update(), "submitting user");
        let backend = submit_backend.clone();
        spawn(async move {
            let result = mutation.apply(&backend).await;
            let accepted = form.write().finish_submit(&mutation, result);
            if accepted {
                reload(form, backend).await;
            }
        });
    };

    let delete_backend = backend.clone();
    let handle_confirm_delete = move |_: ()| {
        let Some(id) = form.write().confirm_delete() else {
            return;
        };
        tracing::info!(%id, "deleting user");
        let backend = delete_backend.clone();
        spawn(async move {
            let result = backend.delete(&id).await;
            let deleted = form.write().finish_delete(result);
            if deleted {
                reload(form, backend).await;
            }
        });
    };

    let state = form();
    let submit_label = if state.is_submitting() {
        "Saving..."
    } else if state.is_editing() {
        "Update"
    } else {
        "Submit"
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "form-wrapper",

            h2 { "User Details Form" }

            form {
                onsubmit: handle_submit,

                for field in Field::ALL {
                    div {
                        key: "{field.name()}",
                        class: "form-group",
                        label { r#for: field.name(), "{field.label()}" }
                        input {
                            id: field.name(),
                            name: field.name(),
                            r#type: "text",
                            value: "{state.draft().get(field)}",
                            oninput: move |evt: FormEvent| form.write().set_field(field, evt.value()),
                        }
                        if let Some(error) = state.errors().get(&field) {
                            small { class: "field-error", "{error}" }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    disabled: state.is_submitting(),
                    "{submit_label}"
                }

                if let Some(message) = state.message() {
                    p { class: "status-message", "{message}" }
                }
            }

            hr {}

            h2 { "All Users" }

            UserList {
                users: state.users().to_vec(),
                on_edit: move |user: UserRecord| form.write().begin_edit(&user),
                on_delete: move |id: String| form.write().request_delete(&id),
            }

            if state.pending_delete().is_some() {
                ConfirmDialog {
                    prompt: DELETE_PROMPT.to_string(),
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| form.write().cancel_delete(),
                }
            }
        }
    }
}
