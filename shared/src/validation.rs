//! Contact-form validation rules and payload normalization.
//!
//! Fields are checked in a fixed order (name, phone, email, message) and
//! the first failing field is the only one reported. Phone is optional:
//! an empty value always passes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// Letters (including extended Latin accents), spaces, apostrophes and
// hyphens; 2 to 50 characters.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ž\s'-]{2,50}$").expect("name pattern compiles"));

// Optional leading `+`, then 7 to 20 characters of digits, spaces,
// parentheses and hyphens.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()-]{7,20}$").expect("phone pattern compiles"));

// `local@domain.tld` shape with a top-level segment of at least two
// characters. Deliberately loose; the delivery provider does its own
// bounce handling.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern compiles"));

const MESSAGE_MIN_CHARS: usize = 10;
const MESSAGE_MAX_CHARS: usize = 1000;

/// Whether `name` is an acceptable sender name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Whether `phone` is an acceptable phone number. Empty passes: the field
/// is optional.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.is_empty() || PHONE_PATTERN.is_match(phone)
}

/// Whether `email` has a plausible `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether `message` is 10 to 1000 characters, any character class.
pub fn is_valid_message(message: &str) -> bool {
    let chars = message.chars().count();
    (MESSAGE_MIN_CHARS..=MESSAGE_MAX_CHARS).contains(&chars)
}

/// Current state of the contact form, mutated per keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    /// Sender name. Required.
    pub name: String,
    /// Sender phone. Optional.
    pub phone: String,
    /// Sender e-mail address. Required.
    pub email: String,
    /// Message body. Required.
    pub message: String,
}

impl ContactForm {
    /// Check all fields in order, stopping at the first failure.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if !is_valid_name(&self.name) {
            return Err(ContactValidationError::InvalidName);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ContactValidationError::InvalidPhone);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactValidationError::InvalidEmail);
        }
        if !is_valid_message(&self.message) {
            return Err(ContactValidationError::MessageLength);
        }
        Ok(())
    }

    /// Validate and, on success, build the normalized delivery payload.
    pub fn submission(&self) -> Result<ContactPayload, ContactValidationError> {
        self.validate()?;
        Ok(ContactPayload {
            user_name: self.name.clone(),
            user_phone: self.phone.clone(),
            user_email: self.email.clone(),
            message: format!(
                "Name: {}\nPhone: {}\nEmail: {}\nMessage: {}",
                self.name, self.phone, self.email, self.message
            ),
        })
    }
}

/// First failing field of a submission attempt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Name missing the 2-50 letter shape.
    #[error("Invalid name: please enter a valid name.")]
    InvalidName,
    /// Non-empty phone outside the allowed shape.
    #[error("Invalid phone number: please enter a valid phone number.")]
    InvalidPhone,
    /// Email missing the `local@domain.tld` shape.
    #[error("Invalid email: please enter a valid email address.")]
    InvalidEmail,
    /// Message too short or too long.
    #[error("Message too short: messages need 10 to 1000 characters.")]
    MessageLength,
}

/// Normalized payload handed to the delivery provider. Field names match
/// the provider-side template variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    /// Sender name, verbatim.
    pub user_name: String,
    /// Sender phone, verbatim (possibly empty).
    pub user_phone: String,
    /// Sender e-mail, verbatim.
    pub user_email: String,
    /// Multi-line summary embedding all four fields.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Al".to_string(),
            phone: String::new(),
            email: "a@b.co".to_string(),
            message: "Hello there!!".to_string(),
        }
    }

    #[test]
    fn accepts_minimal_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn name_boundaries() {
        assert!(is_valid_name("Al"));
        assert!(is_valid_name(&"a".repeat(50)));
        assert!(is_valid_name("O'Neil-Smith"));
        assert!(is_valid_name("Éloïse"));

        assert!(!is_valid_name("A"));
        assert!(!is_valid_name(&"a".repeat(51)));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("name!"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn phone_is_optional() {
        assert!(is_valid_phone(""));
        let mut form = valid_form();
        form.phone = String::new();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn phone_boundaries() {
        assert!(is_valid_phone("1234567"));
        assert!(is_valid_phone("+389 (70) 123-456"));
        assert!(is_valid_phone(&"9".repeat(20)));

        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone(&"9".repeat(21)));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("123456x"));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));

        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@b c.de"));
    }

    #[test]
    fn message_boundaries() {
        assert!(is_valid_message(&"m".repeat(10)));
        assert!(is_valid_message(&"m".repeat(1000)));
        assert!(is_valid_message("line one\nline two"));

        assert!(!is_valid_message("short"));
        assert!(!is_valid_message(&"m".repeat(9)));
        assert!(!is_valid_message(&"m".repeat(1001)));
    }

    #[test]
    fn validation_order_short_circuits() {
        // Everything invalid: only the name failure is reported.
        let form = ContactForm {
            name: "!".to_string(),
            phone: "x".to_string(),
            email: "nope".to_string(),
            message: "hi".to_string(),
        };
        assert_eq!(form.validate(), Err(ContactValidationError::InvalidName));

        // Fix the name: the phone failure surfaces next.
        let form = ContactForm {
            name: "Ana".to_string(),
            ..form
        };
        assert_eq!(form.validate(), Err(ContactValidationError::InvalidPhone));

        // Fix the phone: the email failure surfaces next.
        let form = ContactForm {
            phone: "1234567".to_string(),
            ..form
        };
        assert_eq!(form.validate(), Err(ContactValidationError::InvalidEmail));

        // Fix the email: the message failure surfaces last.
        let form = ContactForm {
            email: "a@b.co".to_string(),
            ..form
        };
        assert_eq!(form.validate(), Err(ContactValidationError::MessageLength));
    }

    #[test]
    fn short_message_never_reaches_payload() {
        let form = ContactForm {
            message: "short".to_string(),
            ..valid_form()
        };
        assert_eq!(form.submission(), Err(ContactValidationError::MessageLength));
    }

    #[test]
    fn submission_builds_normalized_payload() {
        let form = ContactForm {
            name: "Ana".to_string(),
            phone: "+389 70 123 456".to_string(),
            email: "ana@example.com".to_string(),
            message: "Hello from the tests.".to_string(),
        };
        let payload = form.submission().expect("form should validate");

        assert_eq!(payload.user_name, "Ana");
        assert_eq!(payload.user_phone, "+389 70 123 456");
        assert_eq!(payload.user_email, "ana@example.com");
        assert_eq!(
            payload.message,
            "Name: Ana\nPhone: +389 70 123 456\nEmail: ana@example.com\n\
             Message: Hello from the tests."
        );
    }
}
