use crate::core::{BusinessProfile, DomainSuffix};

/// Looks up the business profile for a lowercase domain suffix.
///
/// Suffixes outside the table give `None`; that is a normal outcome.
pub fn classify(suffix: &str) -> Option<BusinessProfile> {
    match suffix.parse::<DomainSuffix>() {
        Ok(known) => Some(known.profile()),
        Err(()) => {
            tracing::debug!("No business profile for suffix '{}'", suffix);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table() {
        assert_eq!(classify("com"), Some(BusinessProfile::Business));
        assert_eq!(classify("co"), Some(BusinessProfile::Business));
        assert_eq!(classify("edu"), Some(BusinessProfile::Education));
        assert_eq!(classify("tech"), Some(BusinessProfile::InformationTechnology));
        assert_eq!(classify("io"), Some(BusinessProfile::InformationTechnology));
        assert_eq!(classify("org"), Some(BusinessProfile::NonProfit));
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            classify("io").map(|p| p.label()),
            Some("Information Technology & Services")
        );
        assert_eq!(
            classify("org").map(|p| p.to_string()).as_deref(),
            Some("Non-Profit Organization or Community")
        );
    }

    #[test]
    fn test_unknown_suffix_is_absent() {
        assert_eq!(classify("net"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(classify("COM"), None);
        assert_eq!(classify("Edu"), None);
    }

    #[test]
    fn test_every_parser_suffix_has_a_profile() {
        for suffix in DomainSuffix::ALL {
            assert_eq!(classify(suffix.as_str()), Some(suffix.profile()));
        }
    }
}
