//! Form checks that run before any request reaches the backend

use crate::core::error::ValidationError;

/// Minimum password length accepted by the signup form
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Login form: both fields present
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required("Email"));
    }
    if password.is_empty() {
        return Err(ValidationError::Required("Password"));
    }
    Ok(())
}

/// Signup form: all fields present, confirmation matches, minimum length
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Password change form: both fields present
pub fn validate_password_change(
    old_password: &str,
    new_password: &str,
) -> Result<(), ValidationError> {
    if old_password.is_empty() || new_password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Generate form: a non-empty URL, returned trimmed.
///
/// Whether the URL really points at a playable video is the backend's call.
pub fn validate_video_url(url: &str) -> Result<String, ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::Required("YouTube link"));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidVideoUrl);
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login("", "pw"), Err(ValidationError::Required("Email")));
        assert_eq!(
            validate_login("a@b.c", ""),
            Err(ValidationError::Required("Password"))
        );
        assert!(validate_login("a@b.c", "pw").is_ok());
    }

    #[test]
    fn test_signup_password_mismatch() {
        assert_eq!(
            validate_signup("Ana", "a@b.c", "secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_signup_password_too_short() {
        assert_eq!(
            validate_signup("Ana", "a@b.c", "abc", "abc"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }

    #[test]
    fn test_signup_missing_fields() {
        assert_eq!(
            validate_signup(" ", "a@b.c", "secret1", "secret1"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_signup_ok() {
        assert!(validate_signup("Ana", "a@b.c", "secret", "secret").is_ok());
    }

    #[test]
    fn test_password_change() {
        assert_eq!(
            validate_password_change("", "new"),
            Err(ValidationError::MissingFields)
        );
        assert!(validate_password_change("old", "new").is_ok());
    }

    #[test]
    fn test_video_url() {
        assert_eq!(
            validate_video_url("   "),
            Err(ValidationError::Required("YouTube link"))
        );
        assert_eq!(
            validate_video_url("https://youtu.be/a b"),
            Err(ValidationError::InvalidVideoUrl)
        );
        assert_eq!(
            validate_video_url("  https://youtu.be/abc123 ").unwrap(),
            "https://youtu.be/abc123"
        );
    }
}
