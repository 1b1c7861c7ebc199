//! Static mapping from backend error ids to user-facing messages.
//!
//! Ids are grouped by thousand: authentication (1000s), validation (1100s),
//! not-found (1200s), business logic (1300s), processing (1400s), and server
//! (1500s). Unknown ids fall back to the wire message, and anything without a
//! usable message falls back to [`FALLBACK_MESSAGE`].

use crate::error::ApiError;

/// Shown when no more specific message can be produced.
pub const FALLBACK_MESSAGE: &str =
    "An unexpected error occurred. Please try again or contact support if the issue persists.";

/// The backend's "no profile exists yet" error id.
pub(crate) const ERROR_ID_PROFILE_NOT_FOUND: i64 = 1201;

/// Returns the fixed display message for a known backend error id.
#[must_use]
pub fn message_for_code(error_id: i64) -> Option<&'static str> {
    let message = match error_id {
        // Authentication (1000s)
        1001 => "Authentication required: Please log in and try again.",
        1002 => "Access denied: You don't have permission to perform this action.",
        1003 => "Invalid authentication token: Please log in again.",

        // Validation (1100s)
        1101 => "Invalid request: Please check your input and try again.",
        1102 => "Invalid request body: The request format is incorrect.",
        1103 => "Missing required field: Please fill in all required fields.",
        1104 => "Invalid file type: Only PDF files are accepted.",
        1105 => "File too large: Please upload a file smaller than 10MB.",
        1106 => "Invalid job match ID: The provided job match ID is not valid.",
        1107 => "Profile ID mismatch: The profile ID does not match.",

        // Not found (1200s)
        1201 => "Profile not found: Please generate your profile first from the generate page.",
        1202 => "Reference letter not found: The requested reference letter doesn't exist.",
        1203 => "Job match not found: The requested job match doesn't exist.",
        1204 => "Work experience not found: The requested work experience doesn't exist.",

        // Business logic (1300s)
        1301 => "No reference letters found: Please upload at least one reference letter before generating your profile.",
        1302 => "Job description is required: Please provide a job description to tailor your profile.",
        1303 => "Job match mismatch: The job match does not belong to this profile.",

        // Processing (1400s)
        1401 => "Failed to process PDF: Unable to extract text from the uploaded file. Please ensure it's a valid PDF.",
        1402 => "Failed to generate CV: Unable to create the PDF file. Please try again.",
        1403 => "Profile generation failed: Unable to generate your profile. Please try again or contact support if the issue persists.",
        1404 => "Profile tailoring failed: Unable to match your profile to the job description. Please try again.",
        1405 => "Profile update failed: Unable to update your profile. Please try again.",

        // Server (1500s)
        1501 => "Server error: Something went wrong on our end. Please try again in a few moments.",
        1502 => "Database error: Unable to access data. Please try again later.",
        1503 => "External service error: A required service is temporarily unavailable. Please try again later.",

        _ => return None,
    };
    Some(message)
}

impl ApiError {
    /// Produces the single user-facing line for this error.
    ///
    /// Structured errors with a known id use the static table (the wire
    /// message is ignored); unknown ids fall back to the wire message. All
    /// other variants use their `Display` form. The result is never empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = match self {
            ApiError::Api { error, .. } => message_for_code(error.error_id)
                .map_or_else(|| error.message.clone(), str::to_owned),
            other => other.to_string(),
        };
        if message.is_empty() {
            FALLBACK_MESSAGE.to_owned()
        } else {
            message
        }
    }
}
