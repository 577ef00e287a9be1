//! The `marksheet verify` command.
//!
//! Re-derives the credential from a saved report and checks the supplied
//! code against it. Catches both tampered codes and reports whose
//! credential block no longer matches their learner/year.

use std::path::PathBuf;

use anyhow::Result;

use marksheet_core::credential::derive_identity;
use marksheet_core::report::TranscriptReport;

pub fn execute(code: String, report_path: PathBuf) -> Result<()> {
    let report = TranscriptReport::load_json(&report_path)?;

    // The derivation is deterministic, so recomputing from the report's
    // learner and issue year must reproduce the stored credential.
    let expected = derive_identity(
        &report.learner.id,
        report.issue_year,
        base_url_of(&report.credential.verification_url),
    )?;

    if expected.verification_code != report.credential.verification_code {
        println!("MISMATCH: report credential does not match its learner and issue year");
        std::process::exit(1);
    }

    if code == expected.verification_code {
        println!(
            "VERIFIED: code {} matches credential {} for learner {}",
            code, expected.credential_id, report.learner.id
        );
        Ok(())
    } else {
        println!(
            "MISMATCH: code {} does not match credential {}",
            code, expected.credential_id
        );
        std::process::exit(1);
    }
}

/// Strip the well-known verification path back off a stored URL.
fn base_url_of(verification_url: &str) -> &str {
    verification_url
        .find("/verify/marksheet/code/")
        .map(|idx| &verification_url[..idx])
        .unwrap_or(verification_url)
}
