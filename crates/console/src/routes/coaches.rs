//! Coach management route handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::instrument;

use courtside_core::Email;

use crate::{
    api::{Coach, NewCoach},
    error::AppError,
    filters,
    routes::{redirect_with_notice, render, FlashQuery, Notice, NoticeKind},
    state::AppState,
};

/// Coach row for the listing table.
#[derive(Debug, Clone)]
pub struct CoachView {
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub hourly_rate: f64,
    pub status: String,
    pub status_badge: &'static str,
    pub is_active: bool,
}

impl From<&Coach> for CoachView {
    fn from(coach: &Coach) -> Self {
        Self {
            name: coach.name.clone(),
            email: coach.email.to_string(),
            specialization: coach.specialization.clone(),
            hourly_rate: coach.hourly_rate,
            status: coach.status.to_string(),
            status_badge: coach.status.badge_class(),
            is_active: coach.status.is_active(),
        }
    }
}

/// Coaches page template.
#[derive(Template)]
#[template(path = "coaches.html")]
pub struct CoachesTemplate {
    pub current_path: &'static str,
    pub notice: Option<Notice>,
    pub error: Option<String>,
    pub coaches: Vec<CoachView>,
}

/// Create-coach form fields.
#[derive(Debug, Deserialize)]
pub struct CoachForm {
    pub email: String,
    pub name: String,
    pub specialization: String,
    pub hourly_rate: f64,
}

/// Block/unblock form field.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub email: String,
}

/// Coaches listing page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let notice = flash.into_notice();

    let (coaches, error) = match state.api().list_coaches().await {
        Ok(coaches) => (coaches.iter().map(CoachView::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to fetch coaches: {e}");
            (vec![], Some("Error loading coaches".to_string()))
        }
    };

    let template = CoachesTemplate {
        current_path: "/coaches",
        notice,
        error,
        coaches,
    };

    render(&template)
}

/// Create coach handler.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn create(State(state): State<AppState>, Form(form): Form<CoachForm>) -> Redirect {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => return redirect_with_notice("/coaches", NoticeKind::Danger, &e.to_string()),
    };

    let payload = NewCoach {
        email,
        name: form.name,
        specialization: form.specialization,
        hourly_rate: form.hourly_rate,
    };

    match state.api().create_coach(&payload).await {
        Ok(outcome) if outcome.success => {
            tracing::info!(email = %payload.email, "Coach created");
            redirect_with_notice("/coaches", NoticeKind::Success, &outcome.message)
        }
        Ok(outcome) => redirect_with_notice("/coaches", NoticeKind::Danger, &outcome.message),
        Err(e) => {
            tracing::error!(email = %payload.email, error = %e, "Failed to create coach");
            redirect_with_notice("/coaches", NoticeKind::Danger, "Error creating coach")
        }
    }
}

/// Block coach handler.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn block(State(state): State<AppState>, Form(form): Form<ToggleForm>) -> Redirect {
    toggle(&state, &form.email, Toggle::Block).await
}

/// Unblock coach handler.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn unblock(State(state): State<AppState>, Form(form): Form<ToggleForm>) -> Redirect {
    toggle(&state, &form.email, Toggle::Unblock).await
}

#[derive(Debug, Clone, Copy)]
enum Toggle {
    Block,
    Unblock,
}

async fn toggle(state: &AppState, raw_email: &str, action: Toggle) -> Redirect {
    let email = match Email::parse(raw_email) {
        Ok(email) => email,
        Err(e) => return redirect_with_notice("/coaches", NoticeKind::Danger, &e.to_string()),
    };

    let result = match action {
        Toggle::Block => state.api().block_coach(&email).await,
        Toggle::Unblock => state.api().unblock_coach(&email).await,
    };

    match result {
        Ok(outcome) if outcome.success => {
            tracing::info!(email = %email, ?action, "Coach status toggled");
            redirect_with_notice("/coaches", NoticeKind::Success, &outcome.message)
        }
        Ok(outcome) => redirect_with_notice("/coaches", NoticeKind::Danger, &outcome.message),
        Err(e) => {
            tracing::error!(email = %email, ?action, error = %e, "Failed to toggle coach status");
            let message = match action {
                Toggle::Block => "Error blocking coach",
                Toggle::Unblock => "Error unblocking coach",
            };
            redirect_with_notice("/coaches", NoticeKind::Danger, message)
        }
    }
}
