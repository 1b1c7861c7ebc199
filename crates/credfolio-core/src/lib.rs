//! Shared foundation for the Credfolio profile client: wire types for the
//! backend REST API, environment-driven configuration, client-side input
//! rules, and display helpers.
//!
//! Nothing in this crate performs I/O; the HTTP client and the workflow
//! controller build on top of it.

pub mod config;
pub mod presentation;
pub mod types;
pub mod validation;

pub use config::{load_client_config, ClientConfig, ConfigError};
pub use presentation::{display_skills, match_percent, MatchLevel};
pub use types::{
    CredibilityHighlight, JobMatch, LetterStatus, Profile, ReferenceLetter, Sentiment,
    TailoredExperience, WorkExperience,
};
pub use validation::{
    validate_job_description, validate_summary, JobDescriptionRule, UploadPolicy, ValidationError,
};
