//! Root layout and landing page.
//!
//! The layout stamps the current theme marker on the document root
//! element; the landing page itself is static marketing copy rendered
//! inside it.

use crate::AppResources;
use askama::Template;
use axum::{Extension, http::StatusCode, response::Html};

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate<'a> {
    theme_class: &'a str,
}

/// `GET /`
#[tracing::instrument(skip(resources))]
pub async fn landing(
    Extension(resources): Extension<AppResources>,
) -> Result<Html<String>, StatusCode> {
    let theme = resources.theme.read().await.current();
    let template = LandingTemplate {
        theme_class: theme.class(),
    };
    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render landing page");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
