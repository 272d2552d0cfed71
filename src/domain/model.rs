use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain suffixes the URL grammar recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainSuffix {
    Com,
    Org,
    Co,
    Io,
    Edu,
    Tech,
}

impl DomainSuffix {
    pub const ALL: [DomainSuffix; 6] = [
        DomainSuffix::Com,
        DomainSuffix::Org,
        DomainSuffix::Co,
        DomainSuffix::Io,
        DomainSuffix::Edu,
        DomainSuffix::Tech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainSuffix::Com => "com",
            DomainSuffix::Org => "org",
            DomainSuffix::Co => "co",
            DomainSuffix::Io => "io",
            DomainSuffix::Edu => "edu",
            DomainSuffix::Tech => "tech",
        }
    }

    pub fn profile(&self) -> BusinessProfile {
        match self {
            DomainSuffix::Com | DomainSuffix::Co => BusinessProfile::Business,
            DomainSuffix::Edu => BusinessProfile::Education,
            DomainSuffix::Tech | DomainSuffix::Io => BusinessProfile::InformationTechnology,
            DomainSuffix::Org => BusinessProfile::NonProfit,
        }
    }
}

impl fmt::Display for DomainSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the lowercase suffix names.
impl FromStr for DomainSuffix {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DomainSuffix::ALL
            .into_iter()
            .find(|suffix| suffix.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessProfile {
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Information Technology & Services")]
    InformationTechnology,
    #[serde(rename = "Non-Profit Organization or Community")]
    NonProfit,
}

impl BusinessProfile {
    pub fn label(&self) -> &'static str {
        match self {
            BusinessProfile::Business => "Business",
            BusinessProfile::Education => "Education",
            BusinessProfile::InformationTechnology => "Information Technology & Services",
            BusinessProfile::NonProfit => "Non-Profit Organization or Community",
        }
    }
}

impl fmt::Display for BusinessProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A company as extracted from its website URL.
///
/// `name` keeps the case it was written with; `canonical_domain` is always
/// `lowercase(name) + "." + suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyIdentity {
    pub name: String,
    pub suffix: DomainSuffix,
    pub canonical_domain: String,
}

impl CompanyIdentity {
    pub fn new(name: impl Into<String>, suffix: DomainSuffix) -> Self {
        let name = name.into();
        let canonical_domain = format!("{}.{}", name.to_lowercase(), suffix.as_str());
        Self {
            name,
            suffix,
            canonical_domain,
        }
    }
}

/// Result of breaking a URL down, shaped by whether a title-cased name was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DomainBreakdown {
    Raw {
        name: String,
        suffix: DomainSuffix,
    },
    Titled {
        name: String,
        suffix: DomainSuffix,
        canonical_domain: String,
    },
}

impl DomainBreakdown {
    pub fn name(&self) -> &str {
        match self {
            DomainBreakdown::Raw { name, .. } | DomainBreakdown::Titled { name, .. } => name,
        }
    }

    pub fn suffix(&self) -> DomainSuffix {
        match self {
            DomainBreakdown::Raw { suffix, .. } | DomainBreakdown::Titled { suffix, .. } => *suffix,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

/// The naming conventions candidates are built from, most likely first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidatePattern {
    First,
    FirstDotLast,
    LastDotFirst,
    FirstInitialLast,
    LastFirstInitial,
}

impl CandidatePattern {
    pub const ORDERED: [CandidatePattern; 5] = [
        CandidatePattern::First,
        CandidatePattern::FirstDotLast,
        CandidatePattern::LastDotFirst,
        CandidatePattern::FirstInitialLast,
        CandidatePattern::LastFirstInitial,
    ];

    pub fn local_part(&self, name: &PersonName) -> String {
        let first_initial: String = name.first.chars().take(1).collect();
        match self {
            CandidatePattern::First => name.first.clone(),
            CandidatePattern::FirstDotLast => format!("{}.{}", name.first, name.last),
            CandidatePattern::LastDotFirst => format!("{}.{}", name.last, name.first),
            CandidatePattern::FirstInitialLast => format!("{}{}", first_initial, name.last),
            CandidatePattern::LastFirstInitial => format!("{}{}", name.last, first_initial),
        }
    }
}

/// A lowercase `local-part@domain` guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailCandidate {
    pub address: String,
    pub pattern: CandidatePattern,
}

impl EmailCandidate {
    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for EmailCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

/// Status labels reported by the verification service. The vocabulary is
/// informal upstream, so anything unrecognised is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerificationStatus {
    Ok,
    OkForAll,
    EmailDisabled,
    DeadServer,
    InvalidMx,
    InvalidSyntax,
    Unknown,
    Other(String),
}

impl VerificationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VerificationStatus::Ok => "ok",
            VerificationStatus::OkForAll => "ok_for_all",
            VerificationStatus::EmailDisabled => "email_disabled",
            VerificationStatus::DeadServer => "dead_server",
            VerificationStatus::InvalidMx => "invalid_mx",
            VerificationStatus::InvalidSyntax => "invalid_syntax",
            VerificationStatus::Unknown => "unknown",
            VerificationStatus::Other(raw) => raw,
        }
    }

    pub fn is_deliverable(&self) -> bool {
        matches!(self, VerificationStatus::Ok)
    }
}

impl From<String> for VerificationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ok" => VerificationStatus::Ok,
            "ok_for_all" => VerificationStatus::OkForAll,
            "email_disabled" => VerificationStatus::EmailDisabled,
            "dead_server" => VerificationStatus::DeadServer,
            "invalid_mx" => VerificationStatus::InvalidMx,
            "invalid_syntax" => VerificationStatus::InvalidSyntax,
            "unknown" => VerificationStatus::Unknown,
            _ => VerificationStatus::Other(raw),
        }
    }
}

impl From<VerificationStatus> for String {
    fn from(status: VerificationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw body returned by the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub result: VerificationStatus,
    #[serde(default)]
    pub esp: Option<String>,
    #[serde(default, rename = "mxServer")]
    pub mx_server: Option<String>,
    #[serde(default, rename = "mxServerIp")]
    pub mx_server_ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    #[serde(rename = "email address")]
    pub email: String,
    #[serde(rename = "validation status")]
    pub status: VerificationStatus,
    #[serde(rename = "email service provider")]
    pub provider: String,
    #[serde(rename = "MX server")]
    pub mx_server: String,
    #[serde(rename = "MX server IP")]
    pub mx_server_ip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VerificationResult {
    Status(VerificationStatus),
    Detailed(VerificationReport),
}

impl VerificationResult {
    pub fn status(&self) -> &VerificationStatus {
        match self {
            VerificationResult::Status(status) => status,
            VerificationResult::Detailed(report) => &report.status,
        }
    }
}
