pub mod outcome;
pub mod runner;

pub use outcome::{needs_migration, MigrationOutcome};
pub use runner::{write_log, MigratedRecord, MigrationRun, MigrationSummary};
