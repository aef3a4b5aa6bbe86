//! Coach account operations.

use courtside_core::Email;

use super::{ActionOutcome, ApiError, Coach, CoachesEnvelope, ConsoleApiClient, EmailPayload, NewCoach};

impl ConsoleApiClient {
    /// Fetch all coach accounts.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn list_coaches(&self) -> Result<Vec<Coach>, ApiError> {
        let envelope: CoachesEnvelope = self.get("/api/coaches").await?;
        Ok(envelope.coaches)
    }

    /// Create a new coach account.
    ///
    /// An application-level rejection (duplicate email) comes back as
    /// `ActionOutcome { success: false, .. }`, not as an error.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn create_coach(&self, coach: &NewCoach) -> Result<ActionOutcome, ApiError> {
        self.post("/api/coaches", coach).await
    }

    /// Block a coach's platform access.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn block_coach(&self, email: &Email) -> Result<ActionOutcome, ApiError> {
        self.post(
            "/api/coaches/block",
            &EmailPayload {
                email: email.clone(),
            },
        )
        .await
    }

    /// Restore a blocked coach's platform access.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn unblock_coach(&self, email: &Email) -> Result<ActionOutcome, ApiError> {
        self.post(
            "/api/coaches/unblock",
            &EmailPayload {
                email: email.clone(),
            },
        )
        .await
    }
}
