mod cookie;
mod crypto;
mod db;
mod extractor;

pub use cookie::{clear_session_cookie, session_cookie, SESSION_COOKIE};
pub use crypto::{generate_session_token, hash_password, session_id_from_token, verify_password};
pub use db::{create_session, delete_session, get_user_from_token};
pub use extractor::{AuthUser, MaybeAuthUser};
