//! Credential identity derivation.
//!
//! Derives the human-presentable credential identifier and its compact
//! verification code/URL from a learner identifier and an issue year.
//! Deterministic for a given (learner id, year) pair, so a previously
//! shared verification link stays valid when the transcript is re-issued
//! within the same year.
//!
//! Known limitation: only the first 8 characters of the learner id feed
//! the identifier, so two learners sharing an 8-character prefix collide
//! within a year. No registry-backed uniqueness check is performed here.

use crate::error::TranscriptError;
use crate::model::CredentialIdentity;

/// Prefix marking an identifier as a marksheet credential.
const CREDENTIAL_PREFIX: &str = "MS";

/// How many leading characters of the learner id feed the identifier.
const LEARNER_ID_PREFIX_LEN: usize = 8;

/// URL path under which verification codes are resolved.
const VERIFY_PATH: &str = "/verify/marksheet/code/";

/// Derive the credential identity for a learner and issue year.
///
/// - `credential_id` = `MS-<year>-<first 8 chars of learner id, uppercased>`
/// - `verification_code` = the id with the `MS-` prefix and separators removed
/// - `verification_url` = `<base_url>/verify/marksheet/code/<code>`
///
/// An empty (or all-whitespace) learner id is a caller error.
pub fn derive_identity(
    learner_id: &str,
    year: i32,
    base_url: &str,
) -> Result<CredentialIdentity, TranscriptError> {
    let learner_id = learner_id.trim();
    if learner_id.is_empty() {
        return Err(TranscriptError::InvalidLearnerIdentity);
    }

    let id_fragment: String = learner_id
        .chars()
        .take(LEARNER_ID_PREFIX_LEN)
        .collect::<String>()
        .to_uppercase();

    let credential_id = format!("{CREDENTIAL_PREFIX}-{year}-{id_fragment}");
    let verification_code = credential_id
        .strip_prefix(CREDENTIAL_PREFIX)
        .unwrap_or(&credential_id)
        .replace('-', "");
    let verification_url = format!(
        "{}{VERIFY_PATH}{verification_code}",
        base_url.trim_end_matches('/')
    );

    Ok(CredentialIdentity {
        credential_id,
        verification_code,
        verification_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_shape() {
        let identity = derive_identity("ab12cd34ef", 2026, "https://marksheet.dev").unwrap();
        assert_eq!(identity.credential_id, "MS-2026-AB12CD34");
        assert_eq!(identity.verification_code, "2026AB12CD34");
        assert_eq!(
            identity.verification_url,
            "https://marksheet.dev/verify/marksheet/code/2026AB12CD34"
        );
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let a = derive_identity("learner-9f3a", 2026, "https://marksheet.dev").unwrap();
        let b = derive_identity("learner-9f3a", 2026, "https://marksheet.dev").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn year_changes_the_identity() {
        let a = derive_identity("learner-9f3a", 2025, "https://marksheet.dev").unwrap();
        let b = derive_identity("learner-9f3a", 2026, "https://marksheet.dev").unwrap();
        assert_ne!(a.credential_id, b.credential_id);
        assert_ne!(a.verification_code, b.verification_code);
    }

    #[test]
    fn short_learner_id_uses_what_is_there() {
        let identity = derive_identity("ab", 2026, "https://marksheet.dev").unwrap();
        assert_eq!(identity.credential_id, "MS-2026-AB");
    }

    #[test]
    fn separators_inside_the_fragment_are_stripped_from_the_code() {
        let identity = derive_identity("ab-12-cd-xyz", 2026, "https://marksheet.dev").unwrap();
        assert_eq!(identity.credential_id, "MS-2026-AB-12-CD");
        assert_eq!(identity.verification_code, "2026AB12CD");
    }

    #[test]
    fn empty_learner_id_is_rejected() {
        assert!(matches!(
            derive_identity("", 2026, "https://marksheet.dev"),
            Err(TranscriptError::InvalidLearnerIdentity)
        ));
        assert!(matches!(
            derive_identity("   ", 2026, "https://marksheet.dev"),
            Err(TranscriptError::InvalidLearnerIdentity)
        ));
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let identity = derive_identity("abcd1234", 2026, "https://marksheet.dev/").unwrap();
        assert_eq!(
            identity.verification_url,
            "https://marksheet.dev/verify/marksheet/code/2026ABCD1234"
        );
    }

    #[test]
    fn documented_prefix_collision() {
        // Two learners sharing an 8-char prefix collide within a year.
        // Flagged upstream, intentionally not fixed here.
        let a = derive_identity("abcdefgh-1", 2026, "https://marksheet.dev").unwrap();
        let b = derive_identity("abcdefgh-2", 2026, "https://marksheet.dev").unwrap();
        assert_eq!(a.credential_id, b.credential_id);
    }
}
