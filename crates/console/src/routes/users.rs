//! User management route handlers.

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
    api::{NewUser, User},
    error::AppError,
    filters,
    routes::{redirect_with_notice, render, FlashQuery, Notice, NoticeKind},
    state::AppState,
};

/// User row for the listing table.
#[derive(Debug, Clone)]
pub struct UserView {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub status_badge: &'static str,
    pub created: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.to_string(),
            role: user.role.clone(),
            status: user.status.to_string(),
            status_badge: user.status.badge_class(),
            created: user.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Users page template.
#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    pub current_path: &'static str,
    pub notice: Option<Notice>,
    pub error: Option<String>,
    pub users: Vec<UserView>,
}

/// Create-user form fields.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub email: String,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "student".to_string()
}

/// Users listing page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, AppError> {
    let notice = flash.into_notice();

    let (users, error) = match state.api().list_users().await {
        Ok(users) => (users.iter().map(UserView::from).collect(), None),
        Err(e) => {
            tracing::error!("Failed to fetch users: {e}");
            (vec![], Some("Error loading users".to_string()))
        }
    };

    let template = UsersTemplate {
        current_path: "/users",
        notice,
        error,
        users,
    };

    render(&template)
}

/// Create user handler.
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn create(State(state): State<AppState>, Form(form): Form<UserForm>) -> Redirect {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => return redirect_with_notice("/users", NoticeKind::Danger, &e.to_string()),
    };

    let payload = NewUser {
        email,
        name: form.name,
        role: form.role,
    };

    match state.api().create_user(&payload).await {
        Ok(outcome) if outcome.success => {
            tracing::info!(email = %payload.email, role = %payload.role, "User created");
            redirect_with_notice("/users", NoticeKind::Success, &outcome.message)
        }
        Ok(outcome) => redirect_with_notice("/users", NoticeKind::Danger, &outcome.message),
        Err(e) => {
            tracing::error!(email = %payload.email, error = %e, "Failed to create user");
            redirect_with_notice("/users", NoticeKind::Danger, "Error creating user")
        }
    }
}
