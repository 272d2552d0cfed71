pub mod candidates;
pub mod classifier;
pub mod finder;
pub mod url_parser;
pub mod verification;

pub use crate::domain::model::{
    BusinessProfile, CandidatePattern, CompanyIdentity, DomainBreakdown, DomainSuffix,
    EmailCandidate, PersonName, VerificationReport, VerificationResponse, VerificationResult,
    VerificationStatus,
};
pub use crate::domain::ports::{ConfigProvider, VerificationProvider};
pub use crate::utils::error::Result;
