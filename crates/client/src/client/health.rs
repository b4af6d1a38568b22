//! Health check operations.

use super::RollbookClient;
use crate::error::Result;
use rollbook_core::health::HealthReport;

impl RollbookClient {
    /// Fetch the server health report.
    pub async fn health(&self) -> Result<HealthReport> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response, "healthz").await
    }
}
