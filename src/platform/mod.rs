pub mod client;
pub mod error;
pub mod types;

pub use client::PlatformClient;
pub use error::PlatformError;
pub use types::{Attachment, Candidate, Integration, OpenJobRole, PartialUpdate, Resume, ResumePage};
