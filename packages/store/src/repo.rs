//! # Backend abstraction
//!
//! The form never talks HTTP directly. Every read and write goes through the
//! [`UserStore`] trait so the same [`crate::UserForm`] logic runs against the REST
//! client in the `api` crate, or against [`crate::MemoryStore`] in tests.
//!
//! | Method | REST call |
//! |--------|-----------|
//! | [`list`](UserStore::list) | `GET {base}/api/users` |
//! | [`create`](UserStore::create) | `POST {base}/api/users` |
//! | [`update`](UserStore::update) | `PATCH {base}/api/users/{id}` |
//! | [`delete`](UserStore::delete) | `DELETE {base}/api/users/{id}` |
//!
//! Create, update and delete report only success or failure. The form reloads the
//! whole list after every successful mutation, so response bodies are not needed.
//!
//! The futures are not required to be `Send`; on the web they run on the browser's
//! single thread.

use crate::error::StoreError;
use crate::models::{UserPayload, UserRecord};

pub trait UserStore {
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<UserRecord>, StoreError>>;
    fn create(
        &self,
        payload: &UserPayload,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn update(
        &self,
        id: &str,
        payload: &UserPayload,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn delete(&self, id: &str) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
