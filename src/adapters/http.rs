use crate::core::{ConfigProvider, VerificationProvider, VerificationResponse};
use crate::utils::error::{EmailGuessError, Result};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;

/// EmailListVerify-style endpoint: `GET ?secret=..&email=..` answering with
/// a JSON body carrying at least `result`.
///
/// One request per lookup. Retries, timeouts and rate limiting are left to
/// the caller.
pub struct EmailListVerifyClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> EmailListVerifyClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl<C: ConfigProvider> VerificationProvider for EmailListVerifyClient<C> {
    async fn lookup(&self, email: &str) -> Result<VerificationResponse> {
        tracing::debug!("Verifying {} via {}", email, self.config.endpoint());

        let response = self
            .client
            .get(self.config.endpoint())
            .query(&[("secret", self.config.secret()), ("email", email)])
            .header(USER_AGENT, self.config.user_agent())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(redact)?;

        tracing::debug!("Verification response status: {}", response.status());

        let body = response.text().await.map_err(redact)?;
        serde_json::from_str(&body).map_err(|e| EmailGuessError::InvalidResponse {
            message: format!("unexpected body for {}: {}", email, e),
        })
    }
}

// The request URL carries the API secret as a query parameter.
fn redact(error: reqwest::Error) -> EmailGuessError {
    EmailGuessError::Transport(error.without_url())
}
