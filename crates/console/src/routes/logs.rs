//! Root action log route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    api::LogEntry,
    error::AppError,
    filters,
    routes::{render, FlashQuery, Notice},
    state::AppState,
};

/// Day-window presets offered by the selector.
pub const DAY_CHOICES: [u32; 4] = [1, 3, 7, 30];

/// Query parameters for the logs page.
///
/// Flash fields are spelled out rather than flattened; `serde_urlencoded`
/// cannot parse numeric fields through `#[serde(flatten)]`.
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    /// How many days back to fetch (default: 1, today only).
    pub days: Option<u32>,
    pub notice: Option<String>,
    pub kind: Option<String>,
}

impl LogsQuery {
    /// The effective day window. Zero is meaningless and treated as the
    /// default.
    #[must_use]
    pub fn days(&self) -> u32 {
        match self.days {
            Some(days) if days > 0 => days,
            _ => 1,
        }
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

/// A day-window option for the selector.
#[derive(Debug, Clone)]
pub struct DayOption {
    pub value: u32,
    pub label: String,
    pub selected: bool,
}

/// Build the selector options, marking the active window.
#[must_use]
pub fn day_options(days: u32) -> Vec<DayOption> {
    DAY_CHOICES
        .iter()
        .map(|&value| DayOption {
            value,
            label: if value == 1 {
                "Today".to_string()
            } else {
                format!("Last {value} days")
            },
            selected: value == days,
        })
        .collect()
}

/// One day's log block.
#[derive(Debug, Clone)]
pub struct LogDayView {
    pub date: String,
    pub content: String,
}

impl From<&LogEntry> for LogDayView {
    fn from(entry: &LogEntry) -> Self {
        Self {
            date: entry.date.clone(),
            content: entry.content.clone(),
        }
    }
}

/// Logs page template.
#[derive(Template)]
#[template(path = "logs.html")]
pub struct LogsTemplate {
    pub current_path: &'static str,
    pub notice: Option<Notice>,
    pub error: Option<String>,
    pub days: u32,
    pub day_options: Vec<DayOption>,
    pub logs: Vec<LogDayView>,
}

/// Logs page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Html<String>, AppError> {
    let days = query.days();
    let notice = query.into_notice();

    let (logs, error) = match state.api().get_logs(days).await {
        Ok(logs) => (logs.iter().map(LogDayView::from).collect(), None),
        Err(e) => {
            tracing::error!(days, "Failed to fetch logs: {e}");
            (vec![], Some("Error loading logs".to_string()))
        }
    };

    let template = LogsTemplate {
        current_path: "/logs",
        notice,
        error,
        days,
        day_options: day_options(days),
        logs,
    };

    render(&template)
}
