//! HTTP middleware and extractors.

pub mod auth;

pub use auth::{RequireAdminAuth, clear_session_cookie, session_cookie};
