//! Session state for the profile workflow.

use credfolio_core::{JobMatch, Profile, ReferenceLetter};

/// Lifecycle of one operation slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StepStatus {
    #[default]
    Idle,
    InFlight,
    /// The last run failed; carries the user-facing message.
    Failed(String),
}

impl StepStatus {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, StepStatus::InFlight)
    }

    /// The stored message when the last run failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            StepStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The user-triggerable operations, one status slot each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Load,
    Upload,
    Refresh,
    Generate,
    Update,
    Tailor,
    Download,
}

impl Step {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Step::Load => "load",
            Step::Upload => "upload",
            Step::Refresh => "refresh",
            Step::Generate => "generate",
            Step::Update => "update",
            Step::Tailor => "tailor",
            Step::Download => "download",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a profile exists, distinguishing "not asked yet" from "backend
/// says none".
#[derive(Debug, Clone, Default)]
pub enum ProfileState {
    #[default]
    Unknown,
    /// The backend answered "no profile yet". A display state, not an error.
    Missing,
    Loaded(Profile),
}

impl ProfileState {
    #[must_use]
    pub fn loaded(&self) -> Option<&Profile> {
        match self {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, ProfileState::Missing)
    }
}

/// Which rendition of the profile the caller is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileView {
    #[default]
    Standard,
    Tailored,
}

/// Position in the canonical first-time flow, derived from session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Upload,
    Generate,
    Edit,
}

#[derive(Debug, Default)]
pub(crate) struct WorkflowState {
    pub(crate) profile: ProfileState,
    pub(crate) letters: Vec<ReferenceLetter>,
    pub(crate) job_match: Option<JobMatch>,
    pub(crate) view: ProfileView,
    pub(crate) draft_summary: Option<String>,
    pub(crate) load: StepStatus,
    pub(crate) upload: StepStatus,
    pub(crate) refresh: StepStatus,
    pub(crate) generate: StepStatus,
    pub(crate) update: StepStatus,
    pub(crate) tailor: StepStatus,
    pub(crate) download: StepStatus,
}

impl WorkflowState {
    pub(crate) fn step(&self, step: Step) -> &StepStatus {
        match step {
            Step::Load => &self.load,
            Step::Upload => &self.upload,
            Step::Refresh => &self.refresh,
            Step::Generate => &self.generate,
            Step::Update => &self.update,
            Step::Tailor => &self.tailor,
            Step::Download => &self.download,
        }
    }

    pub(crate) fn step_mut(&mut self, step: Step) -> &mut StepStatus {
        match step {
            Step::Load => &mut self.load,
            Step::Upload => &mut self.upload,
            Step::Refresh => &mut self.refresh,
            Step::Generate => &mut self.generate,
            Step::Update => &mut self.update,
            Step::Tailor => &mut self.tailor,
            Step::Download => &mut self.download,
        }
    }

    /// Upload until at least one letter exists, then Generate until a
    /// profile is loaded, then Edit.
    pub(crate) fn stage(&self) -> WorkflowStage {
        if self.profile.loaded().is_some() {
            WorkflowStage::Edit
        } else if self.letters.is_empty() {
            WorkflowStage::Upload
        } else {
            WorkflowStage::Generate
        }
    }
}

/// A point-in-time copy of the session state for rendering.
#[derive(Debug, Clone)]
pub struct WorkflowSnapshot {
    pub stage: WorkflowStage,
    pub profile: ProfileState,
    pub letters: Vec<ReferenceLetter>,
    pub job_match: Option<JobMatch>,
    pub view: ProfileView,
    pub draft_summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> ReferenceLetter {
        serde_json::from_value(serde_json::json!({
            "id": "0b8a4f6e-2d17-4f4b-b65e-9a1c3d5e7f20",
            "fileName": "mentor.txt",
            "uploadDate": "2026-08-01T10:15:00Z",
            "status": "PENDING"
        }))
        .expect("valid letter fixture")
    }

    fn profile() -> Profile {
        serde_json::from_value(serde_json::json!({
            "id": "9b2cf304-390d-4573-a9a5-0133d9066701",
            "summary": "A summary.",
            "workExperiences": [],
            "skills": []
        }))
        .expect("valid profile fixture")
    }

    #[test]
    fn stage_starts_at_upload() {
        assert_eq!(WorkflowState::default().stage(), WorkflowStage::Upload);
    }

    #[test]
    fn stage_moves_to_generate_once_a_letter_exists() {
        let mut state = WorkflowState::default();
        state.letters.push(letter());
        assert_eq!(state.stage(), WorkflowStage::Generate);
    }

    #[test]
    fn stage_reaches_edit_once_a_profile_is_loaded() {
        let mut state = WorkflowState::default();
        state.profile = ProfileState::Loaded(profile());
        assert_eq!(state.stage(), WorkflowStage::Edit);
    }

    #[test]
    fn step_status_reports_in_flight_and_error() {
        assert!(StepStatus::InFlight.is_in_flight());
        assert!(!StepStatus::Idle.is_in_flight());
        assert_eq!(StepStatus::Idle.error(), None);
        assert_eq!(
            StepStatus::Failed("boom".to_owned()).error(),
            Some("boom")
        );
    }

    #[test]
    fn profile_state_helpers() {
        assert!(ProfileState::Unknown.loaded().is_none());
        assert!(!ProfileState::Unknown.is_missing());
        assert!(ProfileState::Missing.is_missing());
        assert!(ProfileState::Loaded(profile()).loaded().is_some());
    }

    #[test]
    fn step_names_are_lowercase_verbs() {
        assert_eq!(Step::Load.to_string(), "load");
        assert_eq!(Step::Generate.to_string(), "generate");
        assert_eq!(Step::Download.to_string(), "download");
    }
}
