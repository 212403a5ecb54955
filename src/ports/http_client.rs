use crate::domain::{CheckResponse, Result};
use async_trait::async_trait;

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> Result<CheckResponse>;
}
