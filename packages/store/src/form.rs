//! # User form state machine
//!
//! [`UserForm`] holds everything the user form view shows: the draft being edited,
//! field errors, the status line, the list mirrored from the backend, and which
//! record (if any) is being edited.
//!
//! The draft is either **new** (no edit target) or **editing** (edit target set).
//! It only becomes editing through [`UserForm::begin_edit`] and only returns to new
//! after a successful submit.
//!
//! ## Two ways to drive it
//!
//! Every network interaction is split into a synchronous `begin_*` step that decides
//! what request to send, and a `finish_*` step that applies the outcome. The UI calls
//! them around its own `spawn`ed futures so no signal borrow is held across an
//! `.await`.
//!
//! The async drivers [`load`](UserForm::load), [`submit`](UserForm::submit) and
//! [`delete`](UserForm::delete) compose the same steps against any
//! [`UserStore`], including the reload that follows a successful mutation.
//!
//! ## Guards
//!
//! - A submit is refused while another one is still in flight.
//! - A confirmed delete hands out the pending identifier exactly once.

use crate::error::StoreError;
use crate::models::{Field, UserPayload, UserRecord};
use crate::repo::UserStore;
use crate::validation::{validate, FieldErrors};

pub const FETCH_FAILED: &str = "Error fetching users!";
pub const SAVED: &str = "User saved successfully!";
pub const UPDATED: &str = "User updated successfully!";
pub const SUBMIT_FAILED: &str = "Something went wrong!";
pub const DELETED: &str = "User deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete user!";
pub const DELETE_PROMPT: &str = "Are you sure to delete this user?";

/// The request a valid submit turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    Create(UserPayload),
    Update { id: String, payload: UserPayload },
}

impl Mutation {
    pub fn is_update(&self) -> bool {
        matches!(self, Mutation::Update { .. })
    }

    /// Send this mutation to `store`.
    pub async fn apply<S: UserStore>(&self, store: &S) -> Result<(), StoreError> {
        match self {
            Mutation::Create(payload) => store.create(payload).await,
            Mutation::Update { id, payload } => store.update(id, payload).await,
        }
    }
}

/// State of the user form view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    draft: UserRecord,
    errors: FieldErrors,
    message: Option<String>,
    users: Vec<UserRecord>,
    edit_target: Option<String>,
    pending_delete: Option<String>,
    submitting: bool,
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &UserRecord {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The status line, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Records from the last successful fetch.
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Identifier awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// A keystroke: update one field and clear the status line. Field errors stay.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.message = None;
    }

    /// Recompute field errors from the current draft. Returns true iff valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.draft);
        self.errors.is_empty()
    }

    /// Validate and decide which request to send.
    ///
    /// Returns `None` without touching the network when the draft is invalid or a
    /// previous submit has not finished yet.
    pub fn begin_submit(&mut self) -> Option<Mutation> {
        if self.submitting {
            tracing::debug!("submit ignored, previous request still in flight");
            return None;
        }
        if !self.validate() {
            tracing::debug!(fields = self.errors.len(), "submit blocked by validation");
            return None;
        }

        let payload = self.draft.payload();
        self.submitting = true;
        Some(match &self.edit_target {
            Some(id) => Mutation::Update {
                id: id.clone(),
                payload,
            },
            None => Mutation::Create(payload),
        })
    }

    /// Apply the outcome of a submit. Returns true iff the list must be reloaded.
    pub fn finish_submit(&mut self, mutation: &Mutation, result: Result<(), StoreError>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                let message = if mutation.is_update() { UPDATED } else { SAVED };
                tracing::info!("{message}");
                self.message = Some(message.to_string());
                self.draft = UserRecord::default();
                self.errors.clear();
                self.edit_target = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "user submit failed");
                let message = err.backend_message().unwrap_or(SUBMIT_FAILED);
                self.message = Some(message.to_string());
                false
            }
        }
    }

    /// Copy a listed record, identifier included, into the draft for editing.
    ///
    /// Field errors and the status line are left as they are.
    pub fn begin_edit(&mut self, user: &UserRecord) {
        self.draft = user.clone();
        self.edit_target = user.id.clone();
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// The user confirmed: hand out the identifier to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Apply the outcome of a delete. Returns true iff the list must be reloaded.
    pub fn finish_delete(&mut self, result: Result<(), StoreError>) -> bool {
        match result {
            Ok(()) => {
                self.message = Some(DELETED.to_string());
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "user delete failed");
                self.message = Some(DELETE_FAILED.to_string());
                false
            }
        }
    }

    /// Apply the outcome of a list fetch. On failure the current list is kept.
    pub fn finish_load(&mut self, result: Result<Vec<UserRecord>, StoreError>) {
        match result {
            Ok(users) => self.users = users,
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch users");
                self.message = Some(FETCH_FAILED.to_string());
            }
        }
    }

    /// Fetch the list from `store`.
    pub async fn load<S: UserStore>(&mut self, store: &S) {
        let result = store.list().await;
        self.finish_load(result);
    }

    /// Validate, send, and on success reload. Returns true iff the backend accepted it.
    pub async fn submit<S: UserStore>(&mut self, store: &S) -> bool {
        let Some(mutation) = self.begin_submit() else {
            return false;
        };
        let result = mutation.apply(store).await;
        let accepted = self.finish_submit(&mutation, result);
        if accepted {
            self.load(store).await;
        }
        accepted
    }

    /// Delete `id` if `confirm` approves the prompt, then reload.
    /// Returns true iff the backend deleted it.
    pub async fn delete<S, F>(&mut self, store: &S, id: &str, confirm: F) -> bool
    where
        S: UserStore,
        F: FnOnce(&str) -> bool,
    {
        self.request_delete(id);
        if !confirm(DELETE_PROMPT) {
            self.cancel_delete();
            return false;
        }
        let Some(id) = self.confirm_delete() else {
            return false;
        };
        let result = store.delete(&id).await;
        let deleted = self.finish_delete(result);
        if deleted {
            self.load(store).await;
        }
        deleted
    }
}
