//! Storage bucket route handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    api::{NewBucket, StorageBucket},
    error::AppError,
    filters,
    routes::{redirect_with_notice, render, FlashQuery, Notice, NoticeKind},
    state::AppState,
};

/// Bucket row for the listing table.
#[derive(Debug, Clone)]
pub struct BucketView {
    pub name: String,
    pub purpose: String,
    pub size_gb: u64,
    pub used_gb: u64,
    pub status: String,
    pub status_badge: &'static str,
}

impl From<&StorageBucket> for BucketView {
    fn from(bucket: &StorageBucket) -> Self {
        Self {
            name: bucket.name.clone(),
            purpose: bucket.purpose.clone(),
            size_gb: bucket.size_gb,
            used_gb: bucket.used_gb,
            status: bucket.status.to_string(),
            status_badge: bucket.status.badge_class(),
        }
    }
}

/// Storage page template.
#[derive(Template)]
#[template(path = "storage.html")]
pub struct StorageTemplate {
    pub current_path: &'static str,
    pub notice: Option<Notice>,
    pub error: Option<String>,
    pub buckets: Vec<BucketView>,
}

/// Create-bucket form fields.
#[derive(Debug, Deserialize)]
pub struct BucketForm {
    pub name: String,
    pub purpose: String,
    pub size_gb: u64,
}

/// Storage listing page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let notice = flash.into_notice();

    let (buckets, error) = match state.api().list_buckets().await {
        Ok(buckets) => (buckets.iter().map(BucketView::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to fetch storage buckets: {e}");
            (vec![], Some("Error loading storage".to_string()))
        }
    };

    let template = StorageTemplate {
        current_path: "/storage",
        notice,
        error,
        buckets,
    };

    render(&template)
}

/// Allocate bucket handler.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn create(State(state): State<AppState>, Form(form): Form<BucketForm>) -> Redirect {
    let payload = NewBucket {
        name: form.name,
        purpose: form.purpose,
        size_gb: form.size_gb,
    };

    match state.api().create_bucket(&payload).await {
        Ok(outcome) if outcome.success => {
            tracing::info!(name = %payload.name, size_gb = payload.size_gb, "Bucket created");
            redirect_with_notice("/storage", NoticeKind::Success, &outcome.message)
        }
        Ok(outcome) => redirect_with_notice("/storage", NoticeKind::Danger, &outcome.message),
        Err(e) => {
            tracing::error!(name = %payload.name, error = %e, "Failed to create bucket");
            redirect_with_notice("/storage", NoticeKind::Danger, "Error creating storage bucket")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use courtside_core::BucketStatus;

    fn view(status: BucketStatus) -> BucketView {
        BucketView::from(&StorageBucket {
            name: "match-video".to_string(),
            purpose: "Session recordings".to_string(),
            size_gb: 500,
            used_gb: 120,
            status,
        })
    }

    fn template(buckets: Vec<BucketView>, error: Option<String>) -> StorageTemplate {
        StorageTemplate {
            current_path: "/storage",
            notice: None,
            error,
            buckets,
        }
    }

    #[test]
    fn test_sizes_render_with_gb_suffix() {
        let html = template(vec![view(BucketStatus::Active)], None)
            .render()
            .unwrap();
        assert!(html.contains("500GB"));
        assert!(html.contains("120GB"));
    }

    #[test]
    fn test_inactive_bucket_gets_danger_badge() {
        let html = template(vec![view(BucketStatus::Inactive)], None)
            .render()
            .unwrap();
        assert!(html.contains("bg-danger"));
        assert!(html.contains("inactive"));
    }

    #[test]
    fn test_empty_collection_renders_placeholder() {
        let html = template(vec![], None).render().unwrap();
        assert!(html.contains("No storage buckets found"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_fetch_error_renders_section_error() {
        let html = template(vec![], Some("Error loading storage".to_string()))
            .render()
            .unwrap();
        assert!(html.contains("Error loading storage"));
        assert!(!html.contains("No storage buckets found"));
    }
}
