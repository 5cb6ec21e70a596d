// SPDX-License-Identifier: MPL-2.0
//! Contact form values and their validation rules.
//!
//! Rules are checked in a fixed order and the first failure wins, so the
//! visitor always gets one actionable message at a time.

use std::fmt;

/// Minimum length of the sender name, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum length of the subject, in characters.
pub const MIN_SUBJECT_CHARS: usize = 3;

/// Minimum length of the message body, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// The four contact form values, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    /// Builds a trimmed copy of raw input values.
    #[must_use]
    pub fn trimmed(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Validates these fields.
    pub fn validate(&self) -> ValidationResult {
        validate(&self.name, &self.email, &self.subject, &self.message)
    }
}

/// Why a contact form submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameMissing,
    NameTooShort,
    EmailMissing,
    EmailInvalid,
    SubjectMissing,
    SubjectTooShort,
    MessageMissing,
    MessageTooShort,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::NameMissing => "contact-error-name-missing",
            ValidationError::NameTooShort => "contact-error-name-too-short",
            ValidationError::EmailMissing => "contact-error-email-missing",
            ValidationError::EmailInvalid => "contact-error-email-invalid",
            ValidationError::SubjectMissing => "contact-error-subject-missing",
            ValidationError::SubjectTooShort => "contact-error-subject-too-short",
            ValidationError::MessageMissing => "contact-error-message-missing",
            ValidationError::MessageTooShort => "contact-error-message-too-short",
        }
    }

    /// Returns the English user-facing message.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::NameMissing => "Please enter your name.",
            ValidationError::NameTooShort => "Name must be at least 2 characters long.",
            ValidationError::EmailMissing => "Please enter your email address.",
            ValidationError::EmailInvalid => "Please enter a valid email address.",
            ValidationError::SubjectMissing => "Please enter a subject.",
            ValidationError::SubjectTooShort => "Subject must be at least 3 characters long.",
            ValidationError::MessageMissing => "Please enter your message.",
            ValidationError::MessageTooShort => "Message must be at least 10 characters long.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of a validation pass: `Ok(())` or the first rule that failed.
pub type ValidationResult = Result<(), ValidationError>;

/// Checks the four (already trimmed) contact form values.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in field order: name, email,
/// subject, message.
pub fn validate(name: &str, email: &str, subject: &str, message: &str) -> ValidationResult {
    if name.is_empty() {
        return Err(ValidationError::NameMissing);
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if email.is_empty() {
        return Err(ValidationError::EmailMissing);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if subject.is_empty() {
        return Err(ValidationError::SubjectMissing);
    }
    if subject.chars().count() < MIN_SUBJECT_CHARS {
        return Err(ValidationError::SubjectTooShort);
    }
    if message.is_empty() {
        return Err(ValidationError::MessageMissing);
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}

/// Matches the `local@domain.tld` shape.
///
/// Accepts exactly what `^[^\s@]+@[^\s@]+\.[^\s@]+$` accepts: a single `@`,
/// no whitespace anywhere, a non-empty local part, and a domain holding a
/// `.` with at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any dot that is neither the first nor the last domain character will do
    let mut chars = domain.char_indices();
    let (Some(_), Some((last, _))) = (chars.next(), chars.next_back()) else {
        return false;
    };
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx < last)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: &str = "a@b.co";
    const SUBJECT: &str = "Hi!";
    const MESSAGE: &str = "This is long enough";

    #[test]
    fn fully_valid_form_passes() {
        assert_eq!(validate("Jo", EMAIL, SUBJECT, MESSAGE), Ok(()));
    }

    #[test]
    fn short_message_is_reported() {
        let err = validate("Jo", EMAIL, SUBJECT, "Short").unwrap_err();
        assert_eq!(err, ValidationError::MessageTooShort);
        assert_eq!(
            err.to_string(),
            "Message must be at least 10 characters long."
        );
    }

    #[test]
    fn short_name_wins_regardless_of_other_fields() {
        for (email, subject, message) in [
            ("", "", ""),
            ("not-an-email", "x", "y"),
            (EMAIL, SUBJECT, MESSAGE),
        ] {
            assert_eq!(
                validate("J", email, subject, message),
                Err(ValidationError::NameTooShort)
            );
        }
    }

    #[test]
    fn rules_are_checked_in_order() {
        let cases = [
            (("", "", "", ""), ValidationError::NameMissing),
            (("Jo", "", "", ""), ValidationError::EmailMissing),
            (("Jo", "nope", "", ""), ValidationError::EmailInvalid),
            (("Jo", EMAIL, "", ""), ValidationError::SubjectMissing),
            (("Jo", EMAIL, "Hi", ""), ValidationError::SubjectTooShort),
            (("Jo", EMAIL, SUBJECT, ""), ValidationError::MessageMissing),
            (("Jo", EMAIL, SUBJECT, "123456789"), ValidationError::MessageTooShort),
        ];

        for ((name, email, subject, message), expected) in cases {
            assert_eq!(validate(name, email, subject, message), Err(expected));
        }
    }

    #[test]
    fn boundary_lengths_are_inclusive() {
        assert_eq!(validate("Jo", EMAIL, "abc", "1234567890"), Ok(()));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Two characters, four bytes
        assert_eq!(validate("Éé", EMAIL, SUBJECT, MESSAGE), Ok(()));
        assert_eq!(
            validate("É", EMAIL, SUBJECT, MESSAGE),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn astral_character_counts_once() {
        // One scalar value, two UTF-16 code units
        assert_eq!(
            validate("😀", EMAIL, SUBJECT, MESSAGE),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(validate("😀😀", EMAIL, SUBJECT, MESSAGE), Ok(()));
    }

    #[test]
    fn trimmed_fields_strip_whitespace_before_validation() {
        let fields = FormFields::trimmed("  J  ", " a@b.co ", " Hi! ", MESSAGE);
        assert_eq!(fields.name, "J");
        assert_eq!(fields.email, "a@b.co");
        assert_eq!(fields.validate(), Err(ValidationError::NameTooShort));

        let blank = FormFields::trimmed("   ", EMAIL, SUBJECT, MESSAGE);
        assert_eq!(blank.validate(), Err(ValidationError::NameMissing));
    }

    #[test]
    fn well_formed_emails_are_accepted() {
        for email in [
            "a@b.co",
            "first.last@example.com",
            "user+tag@sub.domain.org",
            "x@a.b.c",
            "ü@exämple.de",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "plain",
            "@b.co",
            "a@",
            "a@b",
            "a@.co",
            "a@b.",
            "a@@b.co",
            "a@b@c.co",
            "a b@c.co",
            "a@b .co",
            "a@b.co\t",
            "",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn invalid_email_surfaces_in_validation() {
        assert_eq!(
            validate("Jo", "a@b", SUBJECT, MESSAGE),
            Err(ValidationError::EmailInvalid)
        );
    }

    #[test]
    fn every_error_has_distinct_key_and_message() {
        let all = [
            ValidationError::NameMissing,
            ValidationError::NameTooShort,
            ValidationError::EmailMissing,
            ValidationError::EmailInvalid,
            ValidationError::SubjectMissing,
            ValidationError::SubjectTooShort,
            ValidationError::MessageMissing,
            ValidationError::MessageTooShort,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.i18n_key(), b.i18n_key());
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
