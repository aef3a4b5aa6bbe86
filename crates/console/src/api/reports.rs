//! Action logs and the daily activity report.

use super::{ApiError, ConsoleApiClient, DailyReport, LogEntry, LogsEnvelope, ReportEnvelope};

impl ConsoleApiClient {
    /// Fetch root action logs for the last `days` days.
    ///
    /// Days with no recorded actions are omitted by the backend.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn get_logs(&self, days: u32) -> Result<Vec<LogEntry>, ApiError> {
        let envelope: LogsEnvelope = self.get(&format!("/api/logs?days={days}")).await?;
        Ok(envelope.logs)
    }

    /// Fetch the daily activity report.
    ///
    /// `date` is `YYYY-MM-DD`; `None` asks the backend for today's report.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    pub async fn get_daily_report(&self, date: Option<&str>) -> Result<DailyReport, ApiError> {
        let path = match date {
            Some(date) => format!("/api/report?date={}", urlencoding::encode(date)),
            None => "/api/report".to_string(),
        };
        let envelope: ReportEnvelope = self.get(&path).await?;
        Ok(envelope.report)
    }
}
