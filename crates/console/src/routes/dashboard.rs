//! Dashboard route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::instrument;

use crate::{
    api::{DailyReport, Transaction},
    error::AppError,
    filters,
    routes::{render, FlashQuery, Notice},
    state::AppState,
};

/// Recent-activity line for the dashboard feed.
#[derive(Debug, Clone)]
pub struct ActivityView {
    pub label: String,
    pub timestamp: String,
    pub amount: f64,
}

impl From<&Transaction> for ActivityView {
    fn from(transaction: &Transaction) -> Self {
        Self {
            label: transaction.label().to_string(),
            timestamp: transaction.timestamp().to_string(),
            amount: transaction.amount,
        }
    }
}

/// Dashboard overview template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_path: &'static str,
    pub notice: Option<Notice>,
    /// Set when any of the four upstream fetches failed; suppresses the
    /// stat cards so no stale numbers render.
    pub error: Option<String>,
    pub active_coaches: usize,
    pub active_users: usize,
    pub bucket_count: usize,
    pub revenue_today: f64,
    pub activity: Vec<ActivityView>,
}

impl DashboardTemplate {
    fn failed(notice: Option<Notice>) -> Self {
        Self {
            current_path: "/",
            notice,
            error: Some("Error loading dashboard".to_string()),
            active_coaches: 0,
            active_users: 0,
            bucket_count: 0,
            revenue_today: 0.0,
            activity: vec![],
        }
    }
}

/// Dashboard page handler.
///
/// The four upstream fetches run concurrently and the refresh is
/// all-or-nothing: if any of them fails, the page renders an error banner
/// instead of partial numbers.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let notice = flash.into_notice();

    let api = state.api();
    let fetched = tokio::try_join!(
        api.list_coaches(),
        api.list_users(),
        api.list_buckets(),
        api.get_daily_report(None),
    );

    let template = match fetched {
        Ok((coaches, users, buckets, report)) => {
            build_overview(notice, &coaches, &users, buckets.len(), &report)
        }
        Err(e) => {
            tracing::error!("Failed to refresh dashboard: {e}");
            DashboardTemplate::failed(notice)
        }
    };

    render(&template)
}

fn build_overview(
    notice: Option<Notice>,
    coaches: &[crate::api::Coach],
    users: &[crate::api::User],
    bucket_count: usize,
    report: &DailyReport,
) -> DashboardTemplate {
    let active_coaches = coaches.iter().filter(|c| c.status.is_active()).count();
    let active_users = users.iter().filter(|u| u.status.is_active()).count();

    let activity = report
        .recent_transactions
        .iter()
        .map(ActivityView::from)
        .collect();

    DashboardTemplate {
        current_path: "/",
        notice,
        error: None,
        active_coaches,
        active_users,
        bucket_count,
        revenue_today: report.total_revenue,
        activity,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use courtside_core::{AccountStatus, Email};

    fn coach(email: &str, status: AccountStatus) -> crate::api::Coach {
        crate::api::Coach {
            email: Email::parse(email).unwrap(),
            name: "Coach".to_string(),
            specialization: "Serve".to_string(),
            hourly_rate: 80.0,
            status,
        }
    }

    fn report_with(transactions: Vec<Transaction>, revenue: f64) -> DailyReport {
        DailyReport {
            date: "2026-08-30".to_string(),
            active_coaches: 0,
            active_users: 0,
            total_sessions: 0,
            total_revenue: revenue,
            recent_transactions: transactions,
        }
    }

    #[test]
    fn test_overview_counts_only_active_accounts() {
        let coaches = vec![
            coach("a@example.com", AccountStatus::Active),
            coach("b@example.com", AccountStatus::Blocked),
            coach("c@example.com", AccountStatus::Active),
        ];
        let template = build_overview(None, &coaches, &[], 4, &report_with(vec![], 150.5));

        assert_eq!(template.active_coaches, 2);
        assert_eq!(template.bucket_count, 4);

        let html = template.render().unwrap();
        assert!(html.contains("$150.50"));
    }

    #[test]
    fn test_empty_activity_renders_placeholder() {
        let template = build_overview(None, &[], &[], 0, &report_with(vec![], 0.0));
        let html = template.render().unwrap();
        assert!(html.contains("No recent activity"));
    }

    #[test]
    fn test_activity_amount_has_two_decimals() {
        let transaction: Transaction =
            serde_json::from_str(r#"{"description": "Session", "amount": 25}"#).unwrap();
        let template = build_overview(None, &[], &[], 0, &report_with(vec![transaction], 25.0));
        let html = template.render().unwrap();
        assert!(html.contains("Session"));
        assert!(html.contains("$25.00"));
    }

    #[test]
    fn test_failed_refresh_renders_error_banner_not_stats() {
        let template = DashboardTemplate::failed(None);
        let html = template.render().unwrap();
        assert!(html.contains("Error loading dashboard"));
        assert!(!html.contains("Active Coaches"));
    }

    #[test]
    fn test_notice_renders_dismissible_alert() {
        let mut template = DashboardTemplate::failed(None);
        template.notice = Some(Notice {
            kind: crate::routes::NoticeKind::Success,
            message: "Coach Lena created successfully".to_string(),
        });
        let html = template.render().unwrap();
        assert!(html.contains("alert-success"));
        assert!(html.contains("Coach Lena created successfully"));
    }
}
