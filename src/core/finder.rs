use crate::core::candidates::generate;
use crate::core::classifier::classify;
use crate::core::url_parser::{parse_company_url, title_case_name};
use crate::core::verification::verify;
use crate::core::{
    BusinessProfile, CompanyIdentity, EmailCandidate, VerificationProvider, VerificationResult,
};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub company: CompanyIdentity,
    pub display_name: String,
    pub profile: Option<BusinessProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessReport {
    pub company: CompanyProfile,
    pub candidates: Vec<EmailCandidate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateVerification {
    pub candidate: EmailCandidate,
    pub result: VerificationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedGuessReport {
    pub company: CompanyProfile,
    pub verifications: Vec<CandidateVerification>,
}

impl VerifiedGuessReport {
    /// The most likely candidate the service considers safe to send to.
    pub fn first_deliverable(&self) -> Option<&CandidateVerification> {
        self.verifications
            .iter()
            .find(|v| v.result.status().is_deliverable())
    }
}

/// Runs the URL → profile → candidates → verification flow for one person.
pub struct EmailFinder<P: VerificationProvider> {
    provider: P,
}

impl<P: VerificationProvider> EmailFinder<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn profile(&self, url: &str) -> Result<CompanyProfile> {
        company_profile(url)
    }

    pub fn guess(&self, url: &str, full_name: &str) -> Result<GuessReport> {
        guess(url, full_name)
    }

    pub async fn verify(&self, email: &str, detailed: bool) -> Result<VerificationResult> {
        verify(&self.provider, email, detailed).await
    }

    /// Verifies every candidate in order. The first failing request aborts
    /// the run and its error is returned unchanged.
    pub async fn guess_and_verify(
        &self,
        url: &str,
        full_name: &str,
        detailed: bool,
    ) -> Result<VerifiedGuessReport> {
        let GuessReport {
            company,
            candidates,
        } = guess(url, full_name)?;

        tracing::info!(
            "Verifying {} candidates at {}",
            candidates.len(),
            company.company.canonical_domain
        );

        let mut verifications = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let result = verify(&self.provider, candidate.as_str(), detailed).await?;
            verifications.push(CandidateVerification { candidate, result });
        }

        let report = VerifiedGuessReport {
            company,
            verifications,
        };

        match report.first_deliverable() {
            Some(hit) => tracing::info!("First deliverable candidate: {}", hit.candidate),
            None => tracing::info!("No candidate was reported deliverable"),
        }

        Ok(report)
    }
}

/// Parses a company URL and classifies it. Needs no verification provider.
pub fn company_profile(url: &str) -> Result<CompanyProfile> {
    let company = parse_company_url(url)?;
    let profile = classify(company.suffix.as_str());
    let display_name = title_case_name(&company.name);

    Ok(CompanyProfile {
        company,
        display_name,
        profile,
    })
}

pub fn guess(url: &str, full_name: &str) -> Result<GuessReport> {
    let company = company_profile(url)?;
    let candidates = generate(full_name, &company.company.canonical_domain)?;

    Ok(GuessReport {
        company,
        candidates,
    })
}
