// ========== Batch API ==========

use crate::client::TravelClient;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl TravelClient {
    /// Starts the user data export job.
    ///
    /// The payload format belongs to the backend; it is returned untouched.
    pub async fn export_user_data(&self) -> ClientResult<String> {
        self.http.post_text("/batch/export-users").await
    }

    /// Status of a batch job execution, as reported by the backend
    pub async fn export_job_status(&self, execution_id: i64) -> ClientResult<String> {
        self.http
            .get_text(&format!("/batch/job-status/{}", execution_id))
            .await
    }
}
