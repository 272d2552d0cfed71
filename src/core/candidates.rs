use crate::core::{CandidatePattern, EmailCandidate, PersonName};
use crate::utils::error::{EmailGuessError, Result};

impl PersonName {
    /// Splits a full name on whitespace. Anything other than exactly two
    /// tokens is rejected rather than truncated or merged.
    pub fn parse(full_name: &str) -> Result<Self> {
        let tokens: Vec<&str> = full_name.split_whitespace().collect();
        match tokens.as_slice() {
            [first, last] => Ok(PersonName {
                first: (*first).to_string(),
                last: (*last).to_string(),
            }),
            _ => Err(EmailGuessError::MalformedName {
                name: full_name.to_string(),
                tokens: tokens.len(),
            }),
        }
    }
}

/// Builds the five usual address guesses for a person at `domain`, most
/// likely first. Output is lowercased and never deduplicated.
pub fn generate(full_name: &str, domain: &str) -> Result<Vec<EmailCandidate>> {
    let name = PersonName::parse(full_name)?;

    let candidates: Vec<EmailCandidate> = CandidatePattern::ORDERED
        .iter()
        .map(|pattern| EmailCandidate {
            address: format!("{}@{}", pattern.local_part(&name), domain).to_lowercase(),
            pattern: *pattern,
        })
        .collect();

    tracing::debug!(
        "Generated {} candidates for '{}' at {}",
        candidates.len(),
        full_name,
        domain
    );

    Ok(candidates)
}
