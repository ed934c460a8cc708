use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};

/// Cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "auth-session";

/// HTTP-only session cookie that expires together with the session itself.
pub fn session_cookie(token: String, expires_at: DateTime<Utc>) -> Cookie<'static> {
    let max_age = (expires_at - Utc::now()).num_seconds().max(0);
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::seconds(max_age));
    cookie
}

/// Immediately-expiring replacement cookie, set on logout.
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn session_cookie_is_http_only_and_scoped_to_root() {
        let cookie = session_cookie("token".to_string(), Utc::now() + Duration::days(30));
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        let max_age = cookie.max_age().unwrap();
        assert!(max_age > time::Duration::days(29));
        assert!(max_age <= time::Duration::days(30));
    }

    #[test]
    fn expired_session_yields_zero_max_age() {
        let cookie = session_cookie("token".to_string(), Utc::now() - Duration::hours(1));
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }

    #[test]
    fn clear_cookie_empties_the_value() {
        let cookie = clear_session_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
