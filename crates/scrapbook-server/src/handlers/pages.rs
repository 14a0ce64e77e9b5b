//! Page and plain-text echo handlers.

use std::path::Path;

use anyhow::{Context, Result};
use axum::extract::{Path as PathParams, State};
use axum::http::{HeaderMap, Uri};
use axum::response::Html;

use crate::app::AppState;
use crate::error::AppError;
use crate::types::PageData;

const SERVICE_VAR: &str = "{{service}}";
const REVISION_VAR: &str = "{{revision}}";

/// The index page template, read from disk once at startup. Rendering
/// substitutes the two placeholder variables.
pub struct PageTemplate {
    raw: String,
}

impl PageTemplate {
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self { raw })
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn render(&self, data: &PageData) -> Result<String, AppError> {
        if !self.raw.contains(SERVICE_VAR) || !self.raw.contains(REVISION_VAR) {
            return Err(AppError::Template(format!(
                "template is missing the {} or {} placeholder",
                SERVICE_VAR, REVISION_VAR
            )));
        }
        Ok(self
            .raw
            .replace(SERVICE_VAR, &data.service)
            .replace(REVISION_VAR, &data.revision))
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let body = state.page.render(&state.page_data)?;
    Ok(Html(body))
}

pub async fn test(uri: Uri) -> String {
    format!("Hello, you've requested: {}", uri.path())
}

/// Scheme of the original request. The service itself always speaks plain
/// HTTP; a fronting proxy reports TLS termination via `x-forwarded-proto`.
fn forwarded_proto(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http")
}

/// Only matches over encrypted transport; otherwise falls through to the
/// router's not-found behavior.
pub async fn secure(headers: HeaderMap, uri: Uri) -> Result<String, AppError> {
    if forwarded_proto(&headers) != "https" {
        return Err(AppError::NotFound);
    }
    Ok(format!("SecureHandler, you've requested: {}", uri.path()))
}

/// Mirror image of [`secure`]: only matches over plain transport.
pub async fn insecure(headers: HeaderMap, uri: Uri) -> Result<String, AppError> {
    if forwarded_proto(&headers) == "https" {
        return Err(AppError::NotFound);
    }
    Ok(format!("InsecureHandler, you've requested: {}", uri.path()))
}

pub async fn book(PathParams((title, page)): PathParams<(String, String)>) -> String {
    format!("You've requested the book: {} on page {}", title, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_both_variables() {
        let tmpl = PageTemplate::from_raw("<p>{{service}} / {{revision}}</p>");
        let data = PageData {
            service: "scrapbook".to_string(),
            revision: "r42".to_string(),
        };
        assert_eq!(tmpl.render(&data).unwrap(), "<p>scrapbook / r42</p>");
    }

    #[test]
    fn test_render_fails_without_placeholders() {
        let tmpl = PageTemplate::from_raw("<p>static page</p>");
        let data = PageData {
            service: "???".to_string(),
            revision: "???".to_string(),
        };
        assert!(matches!(
            tmpl.render(&data),
            Err(AppError::Template(_))
        ));
    }
}
