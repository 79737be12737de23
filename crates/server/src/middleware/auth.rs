//! Authentication extractor and session cookie helpers.
//!
//! The session cookie holds an opaque server-side token; every gated
//! request validates it against the session table. API routes reject with
//! 401, page routes redirect to the login form.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::SiteConfig;
use crate::models::CurrentAdmin;
use crate::services::AuthService;
use crate::state::AppState;

/// Extractor that requires admin authentication.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// Error returned when admin authentication is required but missing.
pub enum AdminAuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/admin/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let reject = || {
            if parts.uri.path().starts_with("/api/") {
                AdminAuthRejection::Unauthorized
            } else {
                AdminAuthRejection::RedirectToLogin
            }
        };

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config().session_cookie)
            .map(|c| c.value().to_owned())
            .ok_or_else(reject)?;

        let admin = AuthService::new(state.pool())
            .validate_session(&token)
            .await
            .map_err(|_| reject())?;

        Ok(Self(admin))
    }
}

/// Build the admin session cookie.
///
/// `HttpOnly`, `SameSite=Lax`, `Secure` when the site is served over HTTPS,
/// lifetime matching the server-side session TTL.
#[must_use]
pub fn session_cookie(config: &SiteConfig, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(config.session_cookie.clone(), token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(config.is_secure());
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::days(
        crate::db::sessions::SESSION_TTL_DAYS,
    ));
    cookie
}

/// Build the removal cookie that clears the admin session.
#[must_use]
pub fn clear_session_cookie(config: &SiteConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(config.session_cookie.clone(), "");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(config.is_secure());
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use std::path::PathBuf;

    fn test_config(base_url: &str) -> SiteConfig {
        SiteConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: std::net::IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: base_url.to_string(),
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 1024,
            session_cookie: "admin_session".to_string(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    #[test]
    fn test_session_cookie_attributes() {
        let config = test_config("https://example.com");
        let cookie = session_cookie(&config, "token123".to_owned());

        assert_eq!(cookie.name(), "admin_session");
        assert_eq!(cookie.value(), "token123");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
    }

    #[test]
    fn test_session_cookie_not_secure_over_http() {
        let config = test_config("http://localhost:3000");
        let cookie = session_cookie(&config, "token123".to_owned());
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let config = test_config("http://localhost:3000");
        let cookie = clear_session_cookie(&config);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
