//! # API crate: REST client for the users backend
//!
//! The backend is an external service; this crate only speaks to it. [`RestStore`]
//! implements [`store::UserStore`] over `reqwest`, so the form logic in the `store`
//! crate never sees HTTP.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`RestStore`]: endpoint construction, request dispatch, error-body parsing |
//! | [`error`] | [`ApiError`] and its conversion into [`store::StoreError`] |
//!
//! ## Endpoints
//!
//! - `GET {base}/api/users` returns a JSON array of users
//! - `POST {base}/api/users` creates a user from the five business fields
//! - `PATCH {base}/api/users/{id}` updates a user
//! - `DELETE {base}/api/users/{id}` deletes a user
//!
//! Failed responses may carry `{ "message": "..." }`; the text is kept so the form
//! can show it verbatim.

pub mod client;
pub mod error;

pub use client::RestStore;
pub use error::ApiError;
