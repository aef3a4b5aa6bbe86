//! Wire types for the platform API.
//!
//! The backend stores more fields than the console renders (`id`,
//! `created_at` on some entities, lifetime totals). Deserialization is
//! tolerant: unknown fields pass through unharmed and the rendered subset
//! below is the contract.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use courtside_core::{AccountStatus, BucketStatus, Email};

// =============================================================================
// Entities
// =============================================================================

/// A coach account.
#[derive(Debug, Clone, Deserialize)]
pub struct Coach {
    pub email: Email,
    pub name: String,
    pub specialization: String,
    pub hourly_rate: f64,
    pub status: AccountStatus,
}

/// A user account.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub email: Email,
    pub name: String,
    pub role: String,
    pub status: AccountStatus,
    /// Naive local timestamp as the backend writes it (no offset).
    pub created_at: NaiveDateTime,
}

/// A storage bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageBucket {
    pub name: String,
    pub purpose: String,
    pub size_gb: u64,
    pub used_gb: u64,
    pub status: BucketStatus,
}

/// One day's worth of root action logs, raw text.
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub content: String,
}

/// A transaction line in the daily report.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Transaction {
    /// Display label, falling back to a generic one.
    #[must_use]
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or("Transaction")
    }

    /// Display timestamp: `time` preferred, `date` as fallback.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        self.time
            .as_deref()
            .or(self.date.as_deref())
            .unwrap_or("")
    }
}

/// Daily activity report.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyReport {
    pub date: String,
    pub active_coaches: u64,
    pub active_users: u64,
    pub total_sessions: u64,
    pub total_revenue: f64,
    pub recent_transactions: Vec<Transaction>,
}

// =============================================================================
// Response envelopes
// =============================================================================

/// `GET /api/coaches` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CoachesEnvelope {
    pub coaches: Vec<Coach>,
}

/// `GET /api/users` response.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<User>,
}

/// `GET /api/storage` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BucketsEnvelope {
    pub buckets: Vec<StorageBucket>,
}

/// `GET /api/logs` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LogsEnvelope {
    pub logs: Vec<LogEntry>,
}

/// `GET /api/report` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportEnvelope {
    pub report: DailyReport,
}

/// Outcome of a create/block/unblock call.
///
/// `success: false` carries an application-level rejection (duplicate email,
/// unknown account); the message is surfaced to the operator verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Request payloads
// =============================================================================

/// `POST /api/coaches` payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewCoach {
    pub email: Email,
    pub name: String,
    pub specialization: String,
    pub hourly_rate: f64,
}

/// `POST /api/users` payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
    pub role: String,
}

/// `POST /api/storage` payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewBucket {
    pub name: String,
    pub purpose: String,
    pub size_gb: u64,
}

/// Payload for coach block/unblock toggles.
#[derive(Debug, Clone, Serialize)]
pub struct EmailPayload {
    pub email: Email,
}
