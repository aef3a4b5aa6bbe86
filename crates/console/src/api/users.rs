//! User account operations.

use super::{ActionOutcome, ApiError, ConsoleApiClient, NewUser, User, UsersEnvelope};

impl ConsoleApiClient {
    /// Fetch all user accounts.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let envelope: UsersEnvelope = self.get("/api/users").await?;
        Ok(envelope.users)
    }

    /// Create a new user account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn create_user(&self, user: &NewUser) -> Result<ActionOutcome, ApiError> {
        self.post("/api/users", user).await
    }
}
