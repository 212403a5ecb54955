use crate::domain::{Result, TestSuite};
use async_trait::async_trait;

#[async_trait]
pub trait ReportPort: Send + Sync {
    /// Record a failed call: a label identifying the output slot, the URL
    /// that was requested and an HTML fragment describing the error.
    async fn display_err_response(&self, label: &str, url: &str, error_html: &str) -> Result<()>;

    async fn record_suite(&self, suite: &TestSuite) -> Result<()>;
}
