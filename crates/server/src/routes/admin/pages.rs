//! Admin HTML pages: the login form and the dashboard shell.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::middleware::RequireAdminAuth;

/// Login form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate;

/// Dashboard shell template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
}

/// Display the login form.
///
/// GET /admin/login
#[instrument]
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate
}

/// Display the admin dashboard.
///
/// GET /admin
#[instrument(skip(admin))]
pub async fn dashboard(RequireAdminAuth(admin): RequireAdminAuth) -> impl IntoResponse {
    DashboardTemplate {
        admin_email: admin.email,
    }
}
