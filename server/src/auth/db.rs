use crate::db::DbPool;
use crate::models::{NewSession, Session, User};
use crate::schema::{sessions, users};
use chrono::{Duration, Utc};
use diesel::prelude::*;

use super::crypto::session_id_from_token;

/// Lifetime of a fresh session.
const SESSION_TTL_DAYS: i64 = 30;

/// A session this close to expiring gets pushed back out to the full TTL
/// the next time it is used.
const RENEWAL_WINDOW_DAYS: i64 = 15;

pub fn create_session(
    conn: &mut PgConnection,
    token: &str,
    user_id: uuid::Uuid,
) -> Result<Session, diesel::result::Error> {
    let session_id = session_id_from_token(token);
    let new_session = NewSession {
        id: &session_id,
        user_id,
        expires_at: Utc::now() + Duration::days(SESSION_TTL_DAYS),
    };

    diesel::insert_into(sessions::table)
        .values(&new_session)
        .returning(Session::as_returning())
        .get_result(conn)
}

/// Resolve a session token to its user.
///
/// An expired session row is deleted on sight. A live session inside the
/// renewal window has its expiry extended before the user is returned.
pub async fn get_user_from_token(pool: &DbPool, token: &str) -> Option<User> {
    let mut conn = pool.get().ok()?;
    let session_id = session_id_from_token(token);

    let (session, user): (Session, User) = sessions::table
        .inner_join(users::table)
        .filter(sessions::id.eq(&session_id))
        .select((Session::as_select(), User::as_select()))
        .first(&mut conn)
        .ok()?;

    let now = Utc::now();
    if session.expires_at <= now {
        if let Err(e) = diesel::delete(sessions::table.find(&session_id)).execute(&mut conn) {
            tracing::warn!("Failed to remove expired session: {}", e);
        }
        return None;
    }

    if session.expires_at - now < Duration::days(RENEWAL_WINDOW_DAYS) {
        if let Err(e) = diesel::update(sessions::table.find(&session_id))
            .set(sessions::expires_at.eq(now + Duration::days(SESSION_TTL_DAYS)))
            .execute(&mut conn)
        {
            tracing::warn!("Failed to renew session: {}", e);
        }
    }

    Some(user)
}

/// Drop the session behind this token, if any. Used by logout.
pub fn delete_session(
    conn: &mut PgConnection,
    token: &str,
) -> Result<(), diesel::result::Error> {
    let session_id = session_id_from_token(token);
    diesel::delete(sessions::table.find(&session_id)).execute(conn)?;
    Ok(())
}
