//! Input validation for signup and media item payloads.
//!
//! Validation happens at the gateway boundary, before any domain operation
//! runs. Every failure is a [`CoreError::Validation`] and surfaces as a 400
//! with the message verbatim.

use crate::error::CoreError;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Inclusive rating bounds.
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 10;

/// Check that an email is plausibly shaped: exactly one `@` with a
/// non-empty local part and a domain containing a dot.
///
/// This is a shape check, not RFC 5321 parsing; the unique constraint on
/// the users table is the real guard against junk duplicates.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    let ok = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);

    if ok {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Check the minimum password length.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Check that a title is non-empty after trimming.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    Ok(())
}

/// Check that a rating is within the inclusive 1..=10 range.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_emails() {
        for email in ["alice@example.com", "a.b+c@sub.domain.org", "x@y.io"] {
            assert!(validate_email(email).is_ok(), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "no-at-sign",
            "@example.com",
            "user@",
            "user@nodot",
            "user@@example.com",
            "user@.com",
            "user@example.",
            "user @example.com",
        ] {
            assert!(validate_email(email).is_err(), "{email:?} should be invalid");
        }
    }

    #[test]
    fn password_boundary_is_six_characters() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title("The Matrix").is_ok());
    }

    #[test]
    fn rating_boundaries() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(10).is_ok());
        assert!(validate_rating(11).is_err());
    }
}
