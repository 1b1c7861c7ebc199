//! Client-side input checks applied before any network call.
//!
//! These mirror rules the backend enforces so obviously bad input fails fast
//! without a round trip. They are a UX convenience, not a security boundary:
//! the backend re-validates everything.

use thiserror::Error;

/// Maximum profile summary length, counted in Unicode scalar values.
pub const SUMMARY_MAX_CHARS: usize = 2000;

/// A pre-network validation failure.
///
/// The `Display` form of every variant is the exact user-facing string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    UnsupportedFileType { message: &'static str },

    #[error("Please enter a job description")]
    EmptyJobDescription,

    #[error("Job description must be at least {min} characters")]
    JobDescriptionTooShort { min: usize },

    #[error("Job description must be at most {max} characters")]
    JobDescriptionTooLong { max: usize },

    #[error("Summary must be at most {max} characters (currently {count})")]
    SummaryTooLong { max: usize, count: usize },
}

/// Which file extensions an upload flow accepts.
///
/// Two flows exist in the product: the reference-letter flow takes plain text
/// or Markdown, the permissive document flow also takes PDFs. Each carries
/// its own fixed rejection wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPolicy {
    /// Reference letters: `.txt` or `.md` only.
    LettersOnly,
    /// Also accepts `.pdf`.
    WithPdf,
}

impl UploadPolicy {
    fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            UploadPolicy::LettersOnly => &["txt", "md"],
            UploadPolicy::WithPdf => &["pdf", "txt", "md"],
        }
    }

    fn rejection_message(self) -> &'static str {
        match self {
            UploadPolicy::LettersOnly => "Please select a .txt or .md file",
            UploadPolicy::WithPdf => "Only PDF, Text, or Markdown files are supported",
        }
    }

    /// Checks a file name against the policy's extension allow-list.
    ///
    /// Matching is case-insensitive and looks only at the extension; the rest
    /// of the name is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnsupportedFileType`] when the extension is
    /// missing or not allow-listed.
    pub fn check_file_name(self, file_name: &str) -> Result<(), ValidationError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        let allowed = matches!(
            &extension,
            Some(ext) if self.allowed_extensions().contains(&ext.as_str())
        );
        if allowed {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedFileType {
                message: self.rejection_message(),
            })
        }
    }
}

/// Character bounds for a job description, applied after trimming.
///
/// The tailoring form uses the default 50/10000; the backend's own floor is
/// lower, so other callers can construct looser bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobDescriptionRule {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for JobDescriptionRule {
    fn default() -> Self {
        Self {
            min_chars: 50,
            max_chars: 10_000,
        }
    }
}

/// Validates a job description and returns the trimmed text to send.
///
/// Empty-after-trim input gets its own message; otherwise the trimmed length
/// (in Unicode scalar values) must fall inside `rule`'s bounds.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyJobDescription`],
/// [`ValidationError::JobDescriptionTooShort`], or
/// [`ValidationError::JobDescriptionTooLong`].
pub fn validate_job_description(
    text: &str,
    rule: &JobDescriptionRule,
) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyJobDescription);
    }
    let count = trimmed.chars().count();
    if count < rule.min_chars {
        return Err(ValidationError::JobDescriptionTooShort {
            min: rule.min_chars,
        });
    }
    if count > rule.max_chars {
        return Err(ValidationError::JobDescriptionTooLong {
            max: rule.max_chars,
        });
    }
    Ok(trimmed.to_owned())
}

/// Validates a profile summary against the character cap.
///
/// Counts Unicode scalar values, not bytes, so multi-byte text is not
/// penalized. An empty summary is allowed.
///
/// # Errors
///
/// Returns [`ValidationError::SummaryTooLong`] when over the cap.
pub fn validate_summary(text: &str) -> Result<(), ValidationError> {
    let count = text.chars().count();
    if count > SUMMARY_MAX_CHARS {
        return Err(ValidationError::SummaryTooLong {
            max: SUMMARY_MAX_CHARS,
            count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_policy_accepts_txt_and_md() {
        assert!(UploadPolicy::LettersOnly.check_file_name("letter.txt").is_ok());
        assert!(UploadPolicy::LettersOnly.check_file_name("notes.md").is_ok());
    }

    #[test]
    fn letters_policy_is_case_insensitive_on_extension() {
        assert!(UploadPolicy::LettersOnly.check_file_name("NOTES.MD").is_ok());
        assert!(UploadPolicy::LettersOnly.check_file_name("Letter.TXT").is_ok());
    }

    #[test]
    fn letters_policy_rejects_pdf_with_fixed_message() {
        let err = UploadPolicy::LettersOnly
            .check_file_name("scan.pdf")
            .unwrap_err();
        assert_eq!(err.to_string(), "Please select a .txt or .md file");
    }

    #[test]
    fn permissive_policy_accepts_pdf() {
        assert!(UploadPolicy::WithPdf.check_file_name("cv.pdf").is_ok());
    }

    #[test]
    fn permissive_policy_rejects_other_with_fixed_message() {
        let err = UploadPolicy::WithPdf.check_file_name("photo.png").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only PDF, Text, or Markdown files are supported"
        );
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(UploadPolicy::LettersOnly.check_file_name("letter").is_err());
        assert!(UploadPolicy::WithPdf.check_file_name("").is_err());
    }

    #[test]
    fn inner_dots_use_the_final_extension() {
        assert!(UploadPolicy::LettersOnly
            .check_file_name("letter.backup.txt")
            .is_ok());
        assert!(UploadPolicy::LettersOnly
            .check_file_name("letter.txt.exe")
            .is_err());
    }

    #[test]
    fn job_description_trimmed_empty_is_rejected() {
        let err = validate_job_description("   \n\t ", &JobDescriptionRule::default()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyJobDescription);
        assert_eq!(err.to_string(), "Please enter a job description");
    }

    #[test]
    fn job_description_below_minimum_is_rejected() {
        let err = validate_job_description("too short", &JobDescriptionRule::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Job description must be at least 50 characters"
        );
    }

    #[test]
    fn job_description_at_minimum_is_accepted_and_trimmed() {
        let text = format!("  {}  ", "x".repeat(50));
        let accepted = validate_job_description(&text, &JobDescriptionRule::default())
            .expect("50 chars should pass");
        assert_eq!(accepted, "x".repeat(50));
    }

    #[test]
    fn job_description_over_maximum_is_rejected() {
        let text = "x".repeat(10_001);
        let err = validate_job_description(&text, &JobDescriptionRule::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Job description must be at most 10000 characters"
        );
    }

    #[test]
    fn job_description_counts_characters_not_bytes() {
        // 50 two-byte scalars meet the minimum even though the byte length is 100.
        let text = "é".repeat(50);
        assert!(validate_job_description(&text, &JobDescriptionRule::default()).is_ok());
    }

    #[test]
    fn custom_rule_bounds_apply() {
        let rule = JobDescriptionRule {
            min_chars: 10,
            max_chars: 100,
        };
        assert!(validate_job_description(&"x".repeat(10), &rule).is_ok());
        assert!(validate_job_description(&"x".repeat(9), &rule).is_err());
    }

    #[test]
    fn summary_at_limit_is_accepted() {
        assert!(validate_summary(&"x".repeat(2000)).is_ok());
    }

    #[test]
    fn summary_over_limit_reports_the_count() {
        let err = validate_summary(&"x".repeat(2001)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Summary must be at most 2000 characters (currently 2001)"
        );
    }

    #[test]
    fn summary_counts_scalar_values_not_bytes() {
        assert!(validate_summary(&"é".repeat(2000)).is_ok());
        assert!(validate_summary(&"é".repeat(2001)).is_err());
    }

    #[test]
    fn empty_summary_is_allowed() {
        assert!(validate_summary("").is_ok());
    }
}
