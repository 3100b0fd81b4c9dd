use std::fmt;

use crate::platform::Resume;

/// Terminal outcome of processing one resume.
///
/// Every resume ends in exactly one of these. A failed direct migration
/// falls through a fallback chain (candidate → integration → attachment →
/// link update → re-migrate), and each link of that chain has its own
/// failure outcome so runs can be audited from the log alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The migrate call (first or retried) reported no errors.
    Migrated,
    /// The resume did not qualify for migration.
    Skipped,
    /// The resume's candidate no longer exists.
    FailedNoCandidate,
    /// No ATS integration or no attachment to fall back to.
    FailedNoAttachment,
    /// The external-link update itself was rejected.
    FailedUpdate,
    /// The retried migrate call still reported errors.
    FailedRemigrate,
}

impl MigrationOutcome {
    pub fn is_failure(self) -> bool {
        !matches!(self, MigrationOutcome::Migrated | MigrationOutcome::Skipped)
    }
}

impl fmt::Display for MigrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationOutcome::Migrated => write!(f, "migrated"),
            MigrationOutcome::Skipped => write!(f, "skipped"),
            MigrationOutcome::FailedNoCandidate => write!(f, "failed: candidate not found"),
            MigrationOutcome::FailedNoAttachment => write!(f, "failed: no attachment"),
            MigrationOutcome::FailedUpdate => write!(f, "failed: link update rejected"),
            MigrationOutcome::FailedRemigrate => write!(f, "failed: re-migration rejected"),
        }
    }
}

/// The migration decision rule: only resumes with a non-empty external link
/// that does not already point at the target bucket are touched.
pub fn needs_migration(resume: &Resume, bucket: &str) -> bool {
    let link = &resume.fields.external_link;
    !link.is_empty() && !link.contains(bucket)
}
