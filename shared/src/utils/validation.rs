//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic `local@domain.tld` shape: non-empty local part, an `@`, and a domain
/// containing at least one dot. Anything stricter belongs to the mail
/// provider, which is the real authority on deliverability.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile"));

/// Check whether an email address matches the accepted shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Mask an email address for log output, keeping enough to correlate entries
///
/// `alice@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

/// Fields collected by the onboarding flow that must be non-blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingField {
    F3Name,
    HospitalName,
}

/// Validate the onboarding form fields, returning the first missing one
pub fn validate_onboarding(f3_name: &str, hospital_name: &str) -> Result<(), OnboardingField> {
    if f3_name.trim().is_empty() {
        return Err(OnboardingField::F3Name);
    }
    if hospital_name.trim().is_empty() {
        return Err(OnboardingField::HospitalName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("no-tld@domain"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn masks_local_part() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn onboarding_requires_both_fields() {
        assert_eq!(validate_onboarding("", "St. Jude"), Err(OnboardingField::F3Name));
        assert_eq!(validate_onboarding("Chaser", "  "), Err(OnboardingField::HospitalName));
        assert!(validate_onboarding("Chaser", "St. Jude").is_ok());
    }
}
