use crate::core::{VerificationProvider, VerificationReport, VerificationResponse, VerificationResult};
use crate::utils::error::{EmailGuessError, Result};

/// Verifies a single address through `provider`.
///
/// A structured report is only returned when `detailed` is set and the
/// address came back deliverable; every other case yields the bare status.
pub async fn verify<P>(provider: &P, email: &str, detailed: bool) -> Result<VerificationResult>
where
    P: VerificationProvider + ?Sized,
{
    let response = provider.lookup(email).await?;
    tracing::info!("Verification status for {}: {}", email, response.result);
    interpret(email, response, detailed)
}

fn interpret(email: &str, response: VerificationResponse, detailed: bool) -> Result<VerificationResult> {
    if !(detailed && response.result.is_deliverable()) {
        return Ok(VerificationResult::Status(response.result));
    }

    let missing = |field: &str| EmailGuessError::InvalidResponse {
        message: format!("deliverable response for {} has no '{}' field", email, field),
    };

    Ok(VerificationResult::Detailed(VerificationReport {
        email: email.to_string(),
        provider: response.esp.ok_or_else(|| missing("esp"))?,
        mx_server: response.mx_server.ok_or_else(|| missing("mxServer"))?,
        mx_server_ip: response.mx_server_ip.ok_or_else(|| missing("mxServerIp"))?,
        status: response.result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VerificationStatus;
    use async_trait::async_trait;

    struct FixedProvider(VerificationResponse);

    #[async_trait]
    impl VerificationProvider for FixedProvider {
        async fn lookup(&self, _email: &str) -> Result<VerificationResponse> {
            Ok(self.0.clone())
        }
    }

    fn deliverable() -> VerificationResponse {
        VerificationResponse {
            result: VerificationStatus::Ok,
            esp: Some("google".to_string()),
            mx_server: Some("aspmx.l.google.com".to_string()),
            mx_server_ip: Some("142.250.1.26".to_string()),
        }
    }

    fn status_only(raw: &str) -> VerificationResponse {
        VerificationResponse {
            result: VerificationStatus::from(raw.to_string()),
            esp: None,
            mx_server: None,
            mx_server_ip: None,
        }
    }

    #[tokio::test]
    async fn test_detailed_deliverable_returns_report() {
        let provider = FixedProvider(deliverable());
        let result = verify(&provider, "john@boeing.com", true).await.unwrap();
        assert_eq!(
            result,
            VerificationResult::Detailed(VerificationReport {
                email: "john@boeing.com".to_string(),
                status: VerificationStatus::Ok,
                provider: "google".to_string(),
                mx_server: "aspmx.l.google.com".to_string(),
                mx_server_ip: "142.250.1.26".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_plain_mode_returns_status_even_when_deliverable() {
        let provider = FixedProvider(deliverable());
        let result = verify(&provider, "john@boeing.com", false).await.unwrap();
        assert_eq!(result, VerificationResult::Status(VerificationStatus::Ok));
    }

    #[tokio::test]
    async fn test_detailed_mode_passes_through_other_statuses() {
        for raw in ["ok_for_all", "email_disabled", "something_new"] {
            let provider = FixedProvider(status_only(raw));
            let result = verify(&provider, "a@b.com", true).await.unwrap();
            assert_eq!(result.status().as_str(), raw);
            assert!(matches!(result, VerificationResult::Status(_)));
        }
    }

    #[tokio::test]
    async fn test_deliverable_without_details_is_invalid_response() {
        let provider = FixedProvider(status_only("ok"));
        let err = verify(&provider, "a@b.com", true).await.unwrap_err();
        assert!(matches!(err, EmailGuessError::InvalidResponse { .. }));
    }
}
