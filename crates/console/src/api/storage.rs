//! Storage bucket operations.

use super::{ActionOutcome, ApiError, BucketsEnvelope, ConsoleApiClient, NewBucket, StorageBucket};

impl ConsoleApiClient {
    /// Fetch all storage buckets.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn list_buckets(&self) -> Result<Vec<StorageBucket>, ApiError> {
        let envelope: BucketsEnvelope = self.get("/api/storage").await?;
        Ok(envelope.buckets)
    }

    /// Allocate a new storage bucket.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn create_bucket(&self, bucket: &NewBucket) -> Result<ActionOutcome, ApiError> {
        self.post("/api/storage", bucket).await
    }
}
