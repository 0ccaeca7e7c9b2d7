//! Page rendering and error responses

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::DomainError;
use crate::session::PageId;

const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// Parse the page templates compiled into the binary
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("home.html", include_str!("../../templates/home.html")),
        ("categories.html", include_str!("../../templates/categories.html")),
        ("search.html", include_str!("../../templates/search.html")),
        ("authors.html", include_str!("../../templates/authors.html")),
        ("books.html", include_str!("../../templates/books.html")),
        ("wishlist.html", include_str!("../../templates/wishlist.html")),
        ("reviews.html", include_str!("../../templates/reviews.html")),
        ("borrow_buy.html", include_str!("../../templates/borrow_buy.html")),
        ("operations.html", include_str!("../../templates/operations.html")),
    ])?;
    Ok(tera)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
}

/// One-shot message shown above the page content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct NavLink {
    slug: &'static str,
    title: &'static str,
}

/// Render `page` with its page-specific `context`
pub fn render_page(
    templates: &Tera,
    page: PageId,
    mut context: Context,
    notice: Option<Notice>,
) -> Result<Html<String>, PageError> {
    let nav: Vec<NavLink> = PageId::destinations()
        .map(|p| NavLink {
            slug: p.slug(),
            title: p.title(),
        })
        .collect();

    context.insert("page", page.slug());
    context.insert("title", page.title());
    context.insert("nav", &nav);
    context.insert("notice", &notice);

    let template = format!("{}.html", page.slug());
    templates
        .render(&template, &context)
        .map(Html)
        .map_err(|e| {
            PageError(DomainError::Internal(format!(
                "Failed to render {}: {}",
                template, e
            )))
        })
}

/// A failure that aborts the current action and is reported to the user
#[derive(Debug)]
pub struct PageError(pub DomainError);

impl From<DomainError> for PageError {
    fn from(e: DomainError) -> Self {
        PageError(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Database(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let mut context = Context::new();
        context.insert("status", &status.as_u16());
        context.insert("message", &self.0.to_string());

        match Tera::one_off(ERROR_TEMPLATE, &context, true) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, self.0.to_string()).into_response(),
        }
    }
}
