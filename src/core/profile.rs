//! Account records exchanged with the `/api/user/*` and auth endpoints

use serde::{Deserialize, Serialize};

/// `GET /api/user/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

impl Profile {
    /// Name for greetings, falling back to username then email
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if !full.is_empty() {
            full.to_string()
        } else if !self.username.trim().is_empty() {
            self.username.clone()
        } else {
            self.email.clone()
        }
    }

    /// One or two letters for the avatar badge
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.display_name()
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_else(|| "?".to_string())
        } else {
            initials
        }
    }
}

/// `POST /api/login`; the backend expects the email as `username`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub email: String,
    pub password: String,
}

/// `PATCH /api/user/me`
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// `POST /api/user/change-password`
#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str, last: &str, username: &str) -> Profile {
        Profile {
            id: 1,
            email: "ana@example.com".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            username: username.to_string(),
        }
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(profile("Ana", "Ruiz", "ana").display_name(), "Ana Ruiz");
        assert_eq!(profile("Ana", "", "ana").display_name(), "Ana");
        assert_eq!(profile("", "", "ana").display_name(), "ana");
        assert_eq!(profile("", "", "").display_name(), "ana@example.com");
    }

    #[test]
    fn test_initials() {
        assert_eq!(profile("ana", "ruiz", "").initials(), "AR");
        assert_eq!(profile("", "", "zed").initials(), "Z");
    }

    #[test]
    fn test_profile_deserializes_with_missing_names() {
        let parsed: Profile =
            serde_json::from_str(r#"{"id": 3, "email": "x@y.z", "username": "x"}"#).unwrap();
        assert_eq!(parsed.first_name, "");
        assert_eq!(parsed.display_name(), "x");
    }

    #[test]
    fn test_login_request_uses_username_key() {
        let body = serde_json::to_value(LoginRequest {
            username: "a@b.c".to_string(),
            password: "pw".to_string(),
        })
        .unwrap();
        assert_eq!(body["username"], "a@b.c");
    }
}
