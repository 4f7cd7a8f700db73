pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod repo;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

pub use config::FormConfig;
pub use error::StoreError;
pub use form::{Mutation, UserForm};
pub use models::{Field, UserPayload, UserRecord};
pub use repo::UserStore;
pub use validation::{validate, FieldErrors};
