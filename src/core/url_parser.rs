use crate::core::{CompanyIdentity, DomainBreakdown, DomainSuffix};
use crate::utils::error::{EmailGuessError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Alternation order matters: the `www.` prefixes must be tried before their
// bare counterparts or `www.` ends up inside the name capture.
static COMPANY_DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<prefix>https://www\.|http://www\.|https://|http://)(?P<name>[A-Za-z0-9_.-]+)\.(?P<suffix>com|org|co|io|edu|tech)",
    )
    .unwrap()
});

/// Finds the first `prefix name.suffix` occurrence in `url`.
///
/// Text around the match is ignored. Dots inside the name are kept, so
/// `https://mail.google.com` yields the name `mail.google`.
pub fn parse_company_url(url: &str) -> Result<CompanyIdentity> {
    let caps = COMPANY_DOMAIN_REGEX
        .captures(url)
        .ok_or_else(|| EmailGuessError::MalformedUrl {
            url: url.to_string(),
        })?;

    let name = &caps["name"];
    let suffix: DomainSuffix =
        caps["suffix"]
            .parse()
            .map_err(|_| EmailGuessError::MalformedUrl {
                url: url.to_string(),
            })?;

    tracing::debug!(
        "Parsed '{}' into prefix='{}' name='{}' suffix='{}'",
        url,
        &caps["prefix"],
        name,
        suffix
    );

    Ok(CompanyIdentity::new(name, suffix))
}

/// Breaks a URL down into company name and suffix. With `title_case` the
/// name is title-cased and the canonical domain is included as well.
pub fn domain_breakdown(url: &str, title_case: bool) -> Result<DomainBreakdown> {
    let identity = parse_company_url(url)?;

    if title_case {
        Ok(DomainBreakdown::Titled {
            name: title_case_name(&identity.name),
            suffix: identity.suffix,
            canonical_domain: identity.canonical_domain,
        })
    } else {
        Ok(DomainBreakdown::Raw {
            name: identity.name,
            suffix: identity.suffix,
        })
    }
}

/// Upper-cases every letter that follows a non-letter and lower-cases the rest.
pub fn title_case_name(name: &str) -> String {
    let mut titled = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for ch in name.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            titled.push(ch);
            previous_is_letter = false;
        }
    }

    titled
}
