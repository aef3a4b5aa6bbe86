//! HTTP route handlers for the console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (probes the platform API)
//!
//! # Dashboard
//! GET  /                       - Overview: stat cards + recent activity
//!
//! # Coaches
//! GET  /coaches                - Coach listing with create form
//! POST /coaches                - Create coach
//! POST /coaches/block          - Block a coach by email
//! POST /coaches/unblock        - Unblock a coach by email
//!
//! # Users
//! GET  /users                  - User listing with create form
//! POST /users                  - Create user
//!
//! # Storage
//! GET  /storage                - Bucket listing with create form
//! POST /storage                - Allocate bucket
//!
//! # Logs & Reports
//! GET  /logs?days=N            - Root action logs for the last N days
//! GET  /report?date=YYYY-MM-DD - Daily activity report
//! ```
//!
//! Every section page accepts `?notice=<message>&kind=<success|danger>`; the
//! POST handlers redirect back with those parameters instead of keeping any
//! server-side flash state.

use askama::Template;
use axum::{
    Router,
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

pub mod coaches;
pub mod dashboard;
pub mod logs;
pub mod report;
pub mod storage;
pub mod users;

/// Build the console route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Coaches
        .route("/coaches", get(coaches::index).post(coaches::create))
        .route("/coaches/block", post(coaches::block))
        .route("/coaches/unblock", post(coaches::unblock))
        // Users
        .route("/users", get(users::index).post(users::create))
        // Storage
        .route("/storage", get(storage::index).post(storage::create))
        // Logs & Reports
        .route("/logs", get(logs::index))
        .route("/report", get(report::index))
}

/// Render a section template to an HTML response.
///
/// # Errors
///
/// Returns `AppError::Internal` if rendering fails; the error response hides
/// the render detail from the client.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template render error: {e}")))
}

// =============================================================================
// Flash notices
// =============================================================================

/// Notice severity, mapped to Bootstrap alert classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Danger,
}

impl NoticeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// A transient dismissible message shown above a section.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Flash parameters carried on a post-action redirect.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub notice: Option<String>,
    pub kind: Option<String>,
}

impl FlashQuery {
    /// Turn the raw query parameters into a renderable notice.
    ///
    /// Unknown kinds degrade to `success` rather than erroring; the kind only
    /// ever selects an alert class.
    #[must_use]
    pub fn into_notice(self) -> Option<Notice> {
        let message = self.notice?;
        let kind = match self.kind.as_deref() {
            Some("danger") => NoticeKind::Danger,
            _ => NoticeKind::Success,
        };
        Some(Notice { kind, message })
    }
}

/// Redirect to a section page carrying a flash notice.
pub fn redirect_with_notice(path: &str, kind: NoticeKind, message: &str) -> Redirect {
    Redirect::to(&format!(
        "{path}?kind={}&notice={}",
        kind.as_str(),
        urlencoding::encode(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_query_into_notice() {
        let flash = FlashQuery {
            notice: Some("Coach created".to_string()),
            kind: Some("success".to_string()),
        };
        let notice = flash.into_notice().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "Coach created");
    }

    #[test]
    fn test_flash_query_without_message_is_no_notice() {
        let flash = FlashQuery {
            notice: None,
            kind: Some("danger".to_string()),
        };
        assert!(flash.into_notice().is_none());
    }

    #[test]
    fn test_flash_query_unknown_kind_degrades_to_success() {
        let flash = FlashQuery {
            notice: Some("hello".to_string()),
            kind: Some("warning\" onload=\"x".to_string()),
        };
        let notice = flash.into_notice().expect("notice");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_redirect_encodes_message_into_location() {
        use axum::response::IntoResponse;

        // Message with spaces and specials must survive the query string
        let response = redirect_with_notice(
            "/coaches",
            NoticeKind::Danger,
            "Coach with email a@b.c already exists",
        )
        .into_response();

        let location = response
            .headers()
            .get(axum::http::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .expect("Location header");

        assert!(location.starts_with("/coaches?kind=danger&notice="));
        assert!(location.contains("%20"));
        assert!(!location.contains(' '));
    }

    #[test]
    fn test_render_produces_html() {
        use crate::routes::logs::{day_options, LogsTemplate};

        let template = LogsTemplate {
            current_path: "/logs",
            notice: None,
            error: None,
            days: 1,
            day_options: day_options(1),
            logs: vec![],
        };
        let html = render(&template).expect("render").0;
        assert!(html.contains("No logs found"));
    }
}
