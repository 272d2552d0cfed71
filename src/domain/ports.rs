use crate::domain::model::VerificationResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn secret(&self) -> &str;
    fn user_agent(&self) -> &str;
}

/// A remote service that reports how deliverable an address is.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    async fn lookup(&self, email: &str) -> Result<VerificationResponse>;
}
