//! Daily activity report route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    api::DailyReport,
    error::AppError,
    filters,
    routes::dashboard::ActivityView,
    routes::{render, FlashQuery, Notice},
    state::AppState,
};

/// Query parameters for the report page.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Report date, `YYYY-MM-DD`. Absent or blank means today (UTC).
    pub date: Option<String>,
    pub notice: Option<String>,
    pub kind: Option<String>,
}

impl ReportQuery {
    /// The effective report date, defaulting to today in UTC.
    ///
    /// An unparseable value is passed through untouched; the backend answers
    /// an unknown date with an empty report rather than an error.
    #[must_use]
    pub fn effective_date(&self) -> String {
        self.date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map_or_else(today_utc, ToString::to_string)
    }

    /// Split off the flash-notice portion of the query.
    #[must_use]
    pub fn into_notice(self) -> Option<Notice> {
        FlashQuery {
            notice: self.notice,
            kind: self.kind,
        }
        .into_notice()
    }
}

fn today_utc() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Report summary for the template.
#[derive(Debug, Clone)]
pub struct ReportView {
    pub active_coaches: u64,
    pub active_users: u64,
    pub total_sessions: u64,
    pub total_revenue: f64,
    pub transactions: Vec<ActivityView>,
}

impl From<&DailyReport> for ReportView {
    fn from(report: &DailyReport) -> Self {
        Self {
            active_coaches: report.active_coaches,
            active_users: report.active_users,
            total_sessions: report.total_sessions,
            total_revenue: report.total_revenue,
            transactions: report
                .recent_transactions
                .iter()
                .map(ActivityView::from)
                .collect(),
        }
    }
}

/// Report page template.
#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub current_path: &'static str,
    pub notice: Option<Notice>,
    pub error: Option<String>,
    pub date: String,
    pub report: Option<ReportView>,
}

/// Report page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Html<String>, AppError> {
    let date = query.effective_date();
    let notice = query.into_notice();

    let (report, error) = match state.api().get_daily_report(Some(&date)).await {
        Ok(report) => (Some(ReportView::from(&report)), None),
        Err(e) => {
            tracing::error!(date = %date, "Failed to fetch report: {e}");
            (None, Some("Error loading report".to_string()))
        }
    };

    let template = ReportTemplate {
        current_path: "/report",
        notice,
        error,
        date,
        report,
    };

    render(&template)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::Transaction;

    fn report_view(revenue: f64, transactions: Vec<Transaction>) -> ReportView {
        ReportView::from(&DailyReport {
            date: "2026-08-30".to_string(),
            active_coaches: 3,
            active_users: 10,
            total_sessions: 42,
            total_revenue: revenue,
            recent_transactions: transactions,
        })
    }

    fn template(report: Option<ReportView>, error: Option<String>) -> ReportTemplate {
        ReportTemplate {
            current_path: "/report",
            notice: None,
            error,
            date: "2026-08-30".to_string(),
            report,
        }
    }

    #[test]
    fn test_effective_date_defaults_to_today() {
        let query = ReportQuery::default();
        let date = query.effective_date();
        // YYYY-MM-DD shape
        assert_eq!(date.len(), 10);
        assert_eq!(date.chars().filter(|&c| c == '-').count(), 2);
    }

    #[test]
    fn test_effective_date_uses_explicit_value() {
        let query = ReportQuery {
            date: Some("2026-01-15".to_string()),
            ..ReportQuery::default()
        };
        assert_eq!(query.effective_date(), "2026-01-15");
    }

    #[test]
    fn test_blank_date_falls_back_to_today() {
        let query = ReportQuery {
            date: Some(String::new()),
            ..ReportQuery::default()
        };
        assert_ne!(query.effective_date(), "");
    }

    #[test]
    fn test_report_renders_expected_figures() {
        // {active_coaches:3, active_users:10, total_sessions:42,
        //  total_revenue:150.5, recent_transactions:[{description:"Session",amount:25}]}
        let transaction: Transaction =
            serde_json::from_str(r#"{"description": "Session", "amount": 25}"#).unwrap();
        let html = template(Some(report_view(150.5, vec![transaction])), None)
            .render()
            .unwrap();
        assert!(html.contains("$150.50"));
        assert!(html.contains("Session"));
        assert!(html.contains("$25.00"));
    }

    #[test]
    fn test_no_transactions_renders_placeholder() {
        let html = template(Some(report_view(0.0, vec![])), None)
            .render()
            .unwrap();
        assert!(html.contains("No transactions"));
    }

    #[test]
    fn test_fetch_error_renders_section_error() {
        let html = template(None, Some("Error loading report".to_string()))
            .render()
            .unwrap();
        assert!(html.contains("Error loading report"));
        assert!(!html.contains("Total Revenue"));
    }
}
