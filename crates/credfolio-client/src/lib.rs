//! HTTP access layer for the credfolio backend.
//!
//! [`CredfolioClient`] exposes one typed operation per backend capability.
//! [`ApiError`] is the classified failure type; its
//! [`user_message`](ApiError::user_message) method is the total classifier
//! turning any failure into a single user-facing line.

pub mod client;
pub mod error;
pub mod messages;

mod transport;

pub use client::CredfolioClient;
pub use error::{ApiError, StructuredError};
pub use messages::{message_for_code, FALLBACK_MESSAGE};
