mod candidate;
mod cli;
mod config;
mod decode;
mod error;
mod migrate;
mod platform;
mod s3ops;
mod text;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use config::RecopsConfig;
use migrate::{write_log, MigrationRun};
use platform::PlatformClient;
use ui::Status;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let status = Status::new();

    match cli.command {
        Command::MigrateResumes { output, limit } => {
            let config = RecopsConfig::load()?;
            let client = login(&config).await?;
            let page_size = limit.unwrap_or(config.page_size);
            let run =
                MigrationRun::new(client, config.bucket, page_size, config.throttle_ms);
            let summary = run.run().await?;
            write_log(&output, &summary.records)?;
            status.ok(&format!(
                "{} migrated, {} skipped, {} failed out of {} resumes; log written to {}",
                summary.migrated,
                summary.skipped,
                summary.failed,
                summary.seen,
                output.display()
            ));
        }

        Command::DecodeId { id } => {
            let config = RecopsConfig::load()?;
            let client = login(&config).await?;
            if let Some(internal_id) = decode::decode_id(&client, &status, &id).await? {
                println!("Internal id: {internal_id}");
                println!("External id: {id}");
            }
        }

        Command::UpdateCandidateName {
            candidate_id,
            new_name,
        } => {
            let config = RecopsConfig::load()?;
            let client = login(&config).await?;
            candidate::update_candidate_name(&client, &candidate_id, &new_name).await?;
            status.ok(&format!("Updated candidate {candidate_id} to {new_name}"));
        }

        Command::ListObjects { bucket, prefix } => {
            let client = s3ops::client().await;
            s3ops::list_objects(&client, &bucket, &prefix).await?;
        }

        Command::UndeleteObjects {
            bucket,
            prefix,
            delete,
        } => {
            let client = s3ops::client().await;
            let acted = s3ops::undelete_objects(&client, &bucket, &prefix, delete).await?;
            if delete {
                status.ok(&format!("Removed {acted} delete markers"));
            } else {
                status.warn(&format!(
                    "Dry run: {acted} delete markers would be removed (pass --delete to remove them)"
                ));
            }
        }

        Command::Pluck { file, key_path } => text::pluck::run(&file, &key_path)?,

        Command::StripPrefix { file, substring } => text::stripprefix::run(&file, &substring)?,

        Command::ContainLines { file_a, file_b } => text::containlines::run(&file_a, &file_b)?,
    }

    Ok(())
}

/// Open one API session from the configured credentials.
async fn login(config: &RecopsConfig) -> Result<PlatformClient> {
    let (email, password) = config.credentials()?;
    Ok(PlatformClient::login(&config.base_url, email, password).await?)
}
