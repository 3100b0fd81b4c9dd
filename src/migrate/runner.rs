//! The resume migration run: pagination, per-resume processing, and the
//! fallback lookup chain for resumes the platform cannot migrate directly.
//!
//! One run walks every page of the resume listing. For each qualifying
//! resume it asks the platform to migrate the attachment; when that fails
//! it tries to locate a replacement link through the candidate's ATS
//! integration, rewrites the resume's external link, and retries the
//! migration once. Failures are scoped to the resume — the page loop never
//! aborts because one record went wrong.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tokio::time::sleep;

use crate::error::RecopsError;
use crate::platform::types::has_errors;
use crate::platform::{Candidate, PlatformClient, Resume};
use crate::ui::Status;

use super::outcome::{needs_migration, MigrationOutcome};

/// One `{id, response}` pair in the migration log: the resume and the final
/// body its migrate call returned.
#[derive(Debug, Serialize)]
pub struct MigratedRecord {
    pub id: String,
    pub response: Value,
}

/// Counts for the whole run plus the log records to persist.
#[derive(Debug, Default)]
pub struct MigrationSummary {
    pub seen: u64,
    pub skipped: u64,
    pub migrated: u64,
    pub failed: u64,
    pub records: Vec<MigratedRecord>,
}

pub struct MigrationRun {
    client: PlatformClient,
    bucket: String,
    page_size: u64,
    throttle: Duration,
    status: Status,
}

impl MigrationRun {
    pub fn new(client: PlatformClient, bucket: String, page_size: u64, throttle_ms: u64) -> Self {
        Self {
            client,
            bucket,
            page_size,
            throttle: Duration::from_millis(throttle_ms),
            status: Status::new(),
        }
    }

    /// Walk every page of the resume listing and process each resume.
    ///
    /// Records accumulate across pages; the caller persists them once at
    /// the end of the run with [`write_log`].
    pub async fn run(&self) -> Result<MigrationSummary, RecopsError> {
        let mut summary = MigrationSummary::default();
        let mut current_page: u64 = 0;

        loop {
            let page = self
                .client
                .list_resumes(self.page_size, current_page * self.page_size)
                .await?;

            self.status
                .plain(&format!("Found {} resumes", page.resumes.len()));
            self.status.plain(&format!("Has more: {}", page.has_more));
            self.status.plain(&format!("Current page: {current_page}"));

            for resume in &page.resumes {
                summary.seen += 1;

                if !needs_migration(resume, &self.bucket) {
                    summary.skipped += 1;
                    self.report(resume, MigrationOutcome::Skipped);
                    continue;
                }

                self.status.plain(&format!("Migrating resume {}", resume.id));
                match self.process_resume(resume).await {
                    Ok((outcome, response)) => {
                        self.report(resume, outcome);
                        if outcome.is_failure() {
                            summary.failed += 1;
                        } else {
                            summary.migrated += 1;
                        }
                        if let Some(response) = response {
                            summary.records.push(MigratedRecord {
                                id: resume.id.clone(),
                                response,
                            });
                        }
                    }
                    // A network or shape error mid-resume abandons that
                    // resume only; the rest of the page continues.
                    Err(err) => {
                        summary.failed += 1;
                        self.status
                            .fail(&format!("Error migrating resume {}: {err}", resume.id));
                    }
                }

                sleep(self.throttle).await;
            }

            if !page.has_more {
                break;
            }
            current_page += 1;
            self.status
                .plain(&format!("Processed so far: {}", summary.seen));
        }

        Ok(summary)
    }

    fn report(&self, resume: &Resume, outcome: MigrationOutcome) {
        match outcome {
            MigrationOutcome::Skipped => {
                self.status.warn(&format!("Skipping resume {}", resume.id));
            }
            outcome if outcome.is_failure() => {
                self.status.fail(&format!("Resume {}: {outcome}", resume.id));
            }
            outcome => {
                self.status.ok(&format!("Resume {}: {outcome}", resume.id));
            }
        }
    }

    /// Process one resume to a terminal outcome. At most two migrate calls
    /// and at most one link update are issued, in the order
    /// migrate → update → migrate.
    async fn process_resume(
        &self,
        resume: &Resume,
    ) -> Result<(MigrationOutcome, Option<Value>), crate::platform::PlatformError> {
        let first = self.client.migrate_resume(&resume.id).await?;
        if !has_errors(&first) {
            return Ok((MigrationOutcome::Migrated, Some(first)));
        }
        self.status.fail(&format!(
            "Error migrating resume {}: {}",
            resume.id, first["errors"]
        ));

        let candidate = match self.client.get_candidate(&resume.fields.candidate_id).await? {
            Some(candidate) => candidate,
            None => {
                self.status
                    .fail(&format!("Candidate not found for resume {}", resume.id));
                return Ok((MigrationOutcome::FailedNoCandidate, None));
            }
        };

        let replacement = match self.find_replacement_link(&candidate).await? {
            Some(url) => url,
            None => {
                self.status
                    .fail(&format!("No attachment found for candidate {}", candidate.id));
                return Ok((MigrationOutcome::FailedNoAttachment, None));
            }
        };

        let update = self
            .client
            .update_resume_link(&resume.id, &replacement)
            .await?;
        if has_errors(&update) {
            self.status.fail(&format!(
                "Error updating resume {}: {}",
                resume.id, update["errors"]
            ));
            return Ok((MigrationOutcome::FailedUpdate, None));
        }

        // The retried call's body is final either way.
        let second = self.client.migrate_resume(&resume.id).await?;
        let outcome = if has_errors(&second) {
            MigrationOutcome::FailedRemigrate
        } else {
            MigrationOutcome::Migrated
        };
        Ok((outcome, Some(second)))
    }

    /// Candidate → open job role → organization → integrations, then the
    /// first attachment of the candidate's ATS application. First `"ats"`
    /// integration with a matching organization wins.
    async fn find_replacement_link(
        &self,
        candidate: &Candidate,
    ) -> Result<Option<String>, crate::platform::PlatformError> {
        let role = self
            .client
            .get_open_job_role(&candidate.fields.open_job_role_id)
            .await?;
        let organization_id = role.fields.organization_id;

        let integrations = self.client.list_integrations(&organization_id).await?;
        let integration = match integrations
            .iter()
            .find(|i| i.fields.kind == "ats" && i.fields.organization_id == organization_id)
        {
            Some(integration) => integration,
            None => return Ok(None),
        };

        let attachments = self
            .client
            .list_ats_attachments(&integration.id, &candidate.fields.ats_candidate_id)
            .await?;
        Ok(attachments.into_iter().next().map(|a| a.url))
    }
}

/// Persist the migration log, overwriting any previous run's file.
pub fn write_log(path: &Path, records: &[MigratedRecord]) -> Result<(), RecopsError> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), records)?;
    Ok(())
}
