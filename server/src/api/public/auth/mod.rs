pub mod login;
pub mod logout;
pub mod page;
pub mod register;

use serde::Serialize;
use utoipa::ToSchema;

/// Successful login/registration. The client shows the transient message
/// and then performs the redirect itself.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthSuccess {
    pub success: bool,
    pub message: String,
    pub redirect_to: String,
}

/// 3-255 chars shaped like `local@domain.tld`: no whitespace, exactly one
/// `@`, and a dot somewhere inside the domain.
pub(crate) fn validate_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 255 {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    // a dot somewhere inside the domain, not at either end
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub(crate) fn validate_password(password: &str) -> bool {
    (6..=255).contains(&password.len())
}

pub(crate) fn validate_name(name: &str) -> bool {
    (1..=100).contains(&name.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_emails() {
        assert!(validate_email("a@b.c"));
        assert!(validate_email("cook@thefridge.dev"));
        assert!(validate_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!validate_email(""));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("no-at-sign.example.com"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("user@com."));
        assert!(!validate_email("user name@example.com"));
    }

    #[test]
    fn rejects_overlong_email() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(!validate_email(&email));
    }

    #[test]
    fn password_length_bounds() {
        assert!(!validate_password("12345"));
        assert!(validate_password("123456"));
        assert!(validate_password(&"x".repeat(255)));
        assert!(!validate_password(&"x".repeat(256)));
    }

    #[test]
    fn name_length_bounds() {
        assert!(!validate_name(""));
        assert!(validate_name("A"));
        assert!(validate_name(&"n".repeat(100)));
        assert!(!validate_name(&"n".repeat(101)));
    }
}
