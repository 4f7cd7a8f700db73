//! Client-side field validation.
//!
//! [`validate`] checks every field of a draft and returns one message per failing
//! field. An empty map means the draft may be sent to the backend.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Field, UserRecord};

/// Failing fields mapped to their message, ordered as the form displays them.
pub type FieldErrors = BTreeMap<Field, &'static str>;

pub const FIRST_NAME_REQUIRED: &str = "First name is required!";
pub const LAST_NAME_REQUIRED: &str = "Second name is required";
pub const PHONE_INVALID: &str = "Enter a valid phone number!";
pub const EMAIL_INVALID: &str = "Enter a valid email!";
pub const ADDRESS_REQUIRED: &str = "Please enter address!";

/// Optional `+`, first digit 1-9, 8 to 15 digits in total.
const PHONE_PATTERN: &str = r"^\+?[1-9][0-9]{7,14}$";
const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("validation regex {pattern} failed to compile: {error}"))
    })
}

pub fn is_valid_phone(phone: &str) -> bool {
    compiled(&PHONE_RE, PHONE_PATTERN).is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    compiled(&EMAIL_RE, EMAIL_PATTERN).is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check a single field, returning its message if it fails.
pub fn check_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::FirstName => is_blank(value).then_some(FIRST_NAME_REQUIRED),
        Field::LastName => is_blank(value).then_some(LAST_NAME_REQUIRED),
        Field::PhoneNumber => (!is_valid_phone(value)).then_some(PHONE_INVALID),
        Field::Email => (!is_valid_email(value)).then_some(EMAIL_INVALID),
        Field::Address => is_blank(value).then_some(ADDRESS_REQUIRED),
    }
}

/// Validate every field of `record`.
pub fn validate(record: &UserRecord) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| check_field(field, record.get(field)).map(|message| (field, message)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> UserRecord {
        UserRecord {
            id: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "+12345678".to_string(),
            email: "a@b.com".to_string(),
            address: "London".to_string(),
        }
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        assert!(validate(&valid_record()).is_empty());
    }

    #[test]
    fn test_empty_draft_fails_every_field() {
        let errors = validate(&UserRecord::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[&Field::FirstName], FIRST_NAME_REQUIRED);
        assert_eq!(errors[&Field::LastName], LAST_NAME_REQUIRED);
        assert_eq!(errors[&Field::PhoneNumber], PHONE_INVALID);
        assert_eq!(errors[&Field::Email], EMAIL_INVALID);
        assert_eq!(errors[&Field::Address], ADDRESS_REQUIRED);
    }

    #[test]
    fn test_whitespace_only_fields_are_required() {
        for field in [Field::FirstName, Field::LastName, Field::Address] {
            let mut record = valid_record();
            record.set(field, " \t ".to_string());
            let errors = validate(&record);
            assert_eq!(errors.len(), 1, "{field:?}");
            assert!(errors.contains_key(&field));
        }
    }

    #[test]
    fn test_phone_numbers() {
        assert!(is_valid_phone("+12345678"));
        assert!(is_valid_phone("12345678"));
        assert!(is_valid_phone("+123456789012345"));
        assert!(!is_valid_phone("0123456789"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone("+1234567890123456"));
        assert!(!is_valid_phone("++12345678"));
        assert!(!is_valid_phone("+1 2345678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_errors_follow_display_order() {
        let mut record = valid_record();
        record.address.clear();
        record.first_name.clear();
        let fields: Vec<Field> = validate(&record).into_keys().collect();
        assert_eq!(fields, vec![Field::FirstName, Field::Address]);
    }
}
