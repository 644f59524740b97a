pub mod project;
pub mod status;
pub mod validation;

pub use project::{ProjectMetadata, ProjectRecord, format_timestamp};
pub use status::{BadgeColor, ProjectStatus, ProjectTemplate, UnknownVariant};
pub use validation::{REQUIRED_FIELDS, ValidationIssue, validate_metadata};
