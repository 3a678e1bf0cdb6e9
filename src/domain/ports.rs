use crate::utils::error::Result;
use async_trait::async_trait;

/// The external text-generation capability behind the style advisor.
///
/// Implementations report every failure (network, quota, unreadable answer)
/// as an error; the advisory pipeline decides what the user gets to see.
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    async fn request_advice(&self, query: &str) -> Result<String>;
}

pub trait AdvisorSettings: Send + Sync {
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn temperature(&self) -> Option<f32>;
}
