//! HTTP page handlers.

use askama::Template;
use axum::response::Html;

use crate::error::AppError;

/// The portal login page. No context: the form is static HTML.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage;

/// Login page handler - renders the login template.
pub async fn login() -> Result<Html<String>, AppError> {
    let page = LoginPage;
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_renders_non_empty_html() {
        let html = LoginPage.render().unwrap();

        assert!(!html.is_empty());
        assert!(html.contains("<form"));
        assert!(html.contains("EduTrack"));
    }

    #[test]
    fn login_page_has_credential_fields() {
        let html = LoginPage.render().unwrap();

        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="password""#));
    }
}
