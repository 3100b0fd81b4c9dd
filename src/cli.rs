//! Command-line interface for recops, built on clap.
//!
//! Each subcommand of [`Command`] corresponds to one operator task. The
//! subcommands are independent: they share no state and each invocation
//! performs one complete job.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// recops — operator toolbox for the recruiting platform.
#[derive(Debug, Parser)]
#[command(name = "recops", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Migrate resume attachments into the platform storage bucket.
    MigrateResumes {
        /// File the migration log is written to.
        #[arg(long, default_value = "migrated_resumes.json")]
        output: PathBuf,

        /// Page size for the resume listing.
        #[arg(long)]
        limit: Option<u64>,
    },

    /// Decode an external id into its internal id.
    DecodeId {
        /// The external id to decode.
        id: String,
    },

    /// Update the display name on a candidate's profile.
    UpdateCandidateName {
        /// Candidate id whose profile is updated.
        candidate_id: String,

        /// New full name for the profile.
        new_name: String,
    },

    /// List all objects under a bucket and prefix.
    ListObjects {
        /// Bucket to list.
        #[arg(long)]
        bucket: String,

        /// Key prefix to filter by.
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Remove latest-version delete markers, un-deleting the objects.
    UndeleteObjects {
        /// Bucket to scan for delete markers.
        #[arg(long)]
        bucket: String,

        /// Key prefix to filter by.
        #[arg(long, default_value = "")]
        prefix: String,

        /// Actually remove the markers. Without this flag the command only
        /// prints what it would do.
        #[arg(long, default_value_t = false)]
        delete: bool,
    },

    /// Extract a field from every element of a JSON document.
    Pluck {
        /// File containing the JSON document.
        file: PathBuf,

        /// Dot-separated key path, e.g. `fields.external_link`.
        key_path: String,
    },

    /// Remove every occurrence of a substring from each line of a file.
    StripPrefix {
        /// File to process.
        file: PathBuf,

        /// Literal substring to remove.
        substring: String,
    },

    /// Print the lines of the second file that also appear in the first.
    ContainLines {
        /// File whose lines form the reference set.
        file_a: PathBuf,

        /// File whose matching lines are printed, in order.
        file_b: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_migrate_resumes_defaults() {
        let cli = Cli::parse_from(["recops", "migrate-resumes"]);
        match cli.command {
            Command::MigrateResumes { output, limit } => {
                assert_eq!(output, PathBuf::from("migrated_resumes.json"));
                assert!(limit.is_none());
            }
            _ => panic!("expected MigrateResumes command"),
        }
    }

    #[test]
    fn cli_parses_undelete_flags() {
        let cli = Cli::parse_from([
            "recops",
            "undelete-objects",
            "--bucket=prod-assessments-media-uploads",
            "--prefix=resumes/",
            "--delete",
        ]);
        match cli.command {
            Command::UndeleteObjects {
                bucket,
                prefix,
                delete,
            } => {
                assert_eq!(bucket, "prod-assessments-media-uploads");
                assert_eq!(prefix, "resumes/");
                assert!(delete);
            }
            _ => panic!("expected UndeleteObjects command"),
        }
    }

    #[test]
    fn cli_undelete_defaults_to_dry_run() {
        let cli = Cli::parse_from(["recops", "undelete-objects", "--bucket=b"]);
        match cli.command {
            Command::UndeleteObjects { delete, prefix, .. } => {
                assert!(!delete);
                assert_eq!(prefix, "");
            }
            _ => panic!("expected UndeleteObjects command"),
        }
    }

    #[test]
    fn cli_parses_pluck_positionals() {
        let cli = Cli::parse_from(["recops", "pluck", "resumes.json", "fields.external_link"]);
        match cli.command {
            Command::Pluck { file, key_path } => {
                assert_eq!(file, PathBuf::from("resumes.json"));
                assert_eq!(key_path, "fields.external_link");
            }
            _ => panic!("expected Pluck command"),
        }
    }

    #[test]
    fn cli_verify() {
        Cli::command().debug_assert();
    }
}
