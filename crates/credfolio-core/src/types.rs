//! Wire types for the Credfolio backend REST API.
//!
//! All types model the `camelCase` JSON bodies the backend produces. Entity ids
//! are UUIDs and `uploadDate` is an RFC 3339 timestamp. Experience dates stay
//! strings: the client renders them but never does date arithmetic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The user's generated professional profile.
///
/// Server-owned: created by generate, mutated by update (summary only), read
/// by get. The client holds at most one per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub summary: String,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One work engagement derived server-side from the user's reference letters.
///
/// Immutable from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: Uuid,
    pub company_name: String,
    pub role: String,
    /// ISO 8601 date string, e.g. `"2020-01-01"`.
    pub start_date: String,
    /// Absent for a current engagement.
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub credibility_highlights: Vec<CredibilityHighlight>,
}

/// A quoted excerpt from a reference letter with a sentiment tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredibilityHighlight {
    pub quote: String,
    pub sentiment: Sentiment,
}

/// Sentiment of a credibility highlight. The backend emits only these two
/// values; anything else fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Neutral,
}

// ---------------------------------------------------------------------------
// Reference letters
// ---------------------------------------------------------------------------

/// An uploaded reference letter as returned by the upload and list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceLetter {
    pub id: Uuid,
    pub file_name: String,
    pub upload_date: DateTime<Utc>,
    pub status: LetterStatus,
}

/// Server-side processing state of an uploaded letter.
///
/// Transitions are driven entirely by the backend; the client observes the
/// value returned at upload time and by re-reading the collection. Any other
/// wire value is a contract violation and fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LetterStatus {
    Pending,
    Processed,
    Failed,
}

impl LetterStatus {
    /// Returns `true` once the backend will no longer change the status.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, LetterStatus::Processed | LetterStatus::Failed)
    }
}

// ---------------------------------------------------------------------------
// Tailoring
// ---------------------------------------------------------------------------

/// Result of tailoring the profile against one job description.
///
/// The backend's minimal response carries `id`, `matchScore`, and
/// `tailoredSummary`; richer responses add the match analysis and the ranked
/// experience list, so those fields default to empty when absent. Ephemeral:
/// held in memory for the session, never persisted client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub id: Uuid,
    /// Overall match strength in `[0, 1]`.
    pub match_score: f64,
    /// Profile summary rewritten for the target job; empty when the backend
    /// kept the original wording.
    #[serde(default)]
    pub tailored_summary: String,
    /// Free-text analysis of why the profile matches.
    #[serde(default)]
    pub match_summary: String,
    /// Experiences ranked by relevance, best first.
    #[serde(default)]
    pub tailored_experiences: Vec<TailoredExperience>,
    #[serde(default)]
    pub relevant_skills: Vec<String>,
}

/// A work experience ranked against the job description. On the wire the
/// experience fields sit at the same level as the ranking fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoredExperience {
    #[serde(flatten)]
    pub experience: WorkExperience,
    /// Relevance to the job description in `[0, 1]`.
    pub relevance_score: f64,
    #[serde(default)]
    pub highlight_reason: Option<String>,
}
