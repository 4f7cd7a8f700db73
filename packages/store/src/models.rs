//! # User records and their form fields
//!
//! [`UserRecord`] is the single entity the form edits. It doubles as the form draft:
//! a record without an `id` has never been persisted.
//!
//! ## Wire format
//!
//! Records travel as JSON with camelCase keys. The backend identifier is written as
//! `_id` and also accepted as `id` when reading. Any other keys the backend adds
//! (timestamps, version counters) are ignored.
//!
//! ```json
//! {
//!   "_id": "665f1c...",
//!   "firstName": "Ada",
//!   "lastName": "Lovelace",
//!   "phoneNumber": "+441234567890",
//!   "email": "ada@example.com",
//!   "address": "12 St James's Square"
//! }
//! ```
//!
//! [`UserPayload`] is the body of create and update requests: the five business
//! fields and nothing else.
//!
//! [`Field`] names the five fields in display order and maps each one to its wire
//! name and its human label.

use serde::{Deserialize, Serialize};

/// A user as stored by the backend, or the draft being edited in the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Backend-assigned identifier. `None` until the record is first saved.
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl UserRecord {
    /// Read one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    /// Overwrite one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
            Field::Address => &mut self.address,
        };
        *slot = value;
    }

    /// "First Last", as shown in the list heading of each card.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn payload(&self) -> UserPayload {
        UserPayload::from(self)
    }
}

/// Request body for create and update calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
}

impl From<&UserRecord> for UserPayload {
    fn from(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            phone_number: record.phone_number.clone(),
            email: record.email.clone(),
            address: record.address.clone(),
        }
    }
}

impl UserPayload {
    /// Attach an identifier, producing the record the backend would store.
    pub fn into_record(self, id: Option<String>) -> UserRecord {
        UserRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            email: self.email,
            address: self.address,
        }
    }
}

/// One of the five editable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Address,
}

impl Field {
    /// All fields in the order the form renders them.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::PhoneNumber,
        Field::Email,
        Field::Address,
    ];

    /// JSON key and HTML input name: "firstName".
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::PhoneNumber => "phoneNumber",
            Field::Email => "email",
            Field::Address => "address",
        }
    }

    /// Human label: "First Name".
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::PhoneNumber => "Phone Number",
            Field::Email => "Email",
            Field::Address => "Address",
        }
    }

    /// Inverse of [`Field::name`].
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}
