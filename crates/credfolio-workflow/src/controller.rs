//! Orchestration of the upload, generate, edit, tailor, download journey.

use std::sync::{Mutex, MutexGuard, PoisonError};

use credfolio_client::{ApiError, CredfolioClient};
use credfolio_core::{ClientConfig, JobMatch, Profile, ReferenceLetter, UploadPolicy};
use thiserror::Error;

use crate::state::{
    ProfileState, ProfileView, Step, StepStatus, WorkflowSnapshot, WorkflowStage, WorkflowState,
};

/// Errors surfaced by the workflow controller.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The slot already has a request outstanding; this trigger was dropped.
    #[error("{step} is already in progress")]
    OperationInFlight { step: Step },

    #[error("no profile loaded")]
    ProfileNotLoaded,

    #[error("no tailoring result available")]
    NoTailoredProfile,

    #[error("no summary edit in progress")]
    NoEditInProgress,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl WorkflowError {
    /// Single user-facing line for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::Api(inner) => inner.user_message(),
            other => other.to_string(),
        }
    }
}

/// Drives the multi-step profile journey over the API client.
///
/// Each operation owns one status slot; a second trigger while a request is
/// outstanding is suppressed without network I/O. Failures are stored on the
/// owning slot as user-facing messages and never clear state belonging to
/// another step: a failed tailoring leaves the loaded profile untouched.
pub struct ProfileWorkflow {
    client: CredfolioClient,
    state: Mutex<WorkflowState>,
}

impl ProfileWorkflow {
    /// Creates a workflow with a client built from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Api`] when the underlying client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, WorkflowError> {
        Ok(Self::with_client(CredfolioClient::new(config)?))
    }

    /// Wraps an already-constructed API client.
    #[must_use]
    pub fn with_client(client: CredfolioClient) -> Self {
        Self {
            client,
            state: Mutex::new(WorkflowState::default()),
        }
    }

    // The lock is held only for synchronous reads and writes, never across
    // an await point. A poisoned lock carries no broken invariant here, so
    // the poison is absorbed.
    fn lock(&self) -> MutexGuard<'_, WorkflowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks `step` in flight, refusing when a request is already outstanding.
    fn begin(&self, step: Step) -> Result<(), WorkflowError> {
        let mut state = self.lock();
        if state.step(step).is_in_flight() {
            tracing::debug!(%step, "trigger suppressed, operation already in flight");
            return Err(WorkflowError::OperationInFlight { step });
        }
        *state.step_mut(step) = StepStatus::InFlight;
        Ok(())
    }

    /// Stores the failure on the step's slot and passes the error through.
    fn fail(&self, step: Step, error: ApiError) -> WorkflowError {
        let message = error.user_message();
        tracing::warn!(%step, %message, "operation failed");
        *self.lock().step_mut(step) = StepStatus::Failed(message);
        WorkflowError::Api(error)
    }

    fn finish(&self, step: Step) {
        *self.lock().step_mut(step) = StepStatus::Idle;
    }

    /// Fetches the profile and records whether one exists.
    ///
    /// A "no profile yet" answer is not a failure: the slot returns to idle
    /// and the state moves to [`ProfileState::Missing`], which the original
    /// product renders as its own "generate your profile first" view.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::OperationInFlight`] when a load is already
    /// outstanding, or [`WorkflowError::Api`] for any other backend failure.
    pub async fn load_profile(&self) -> Result<ProfileState, WorkflowError> {
        self.begin(Step::Load)?;
        match self.client.get_profile().await {
            Ok(profile) => {
                let mut state = self.lock();
                state.load = StepStatus::Idle;
                state.profile = ProfileState::Loaded(profile);
                Ok(state.profile.clone())
            }
            Err(error) if error.is_profile_missing() => {
                let mut state = self.lock();
                state.load = StepStatus::Idle;
                state.profile = ProfileState::Missing;
                Ok(ProfileState::Missing)
            }
            Err(error) => Err(self.fail(Step::Load, error)),
        }
    }

    /// Uploads one reference letter under the strict letters policy and adds
    /// it to the session list.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::OperationInFlight`] when an upload is
    /// outstanding, or [`WorkflowError::Api`] when validation or the backend
    /// rejects the file.
    pub async fn upload_letter(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<ReferenceLetter, WorkflowError> {
        self.begin(Step::Upload)?;
        match self
            .client
            .upload_reference_letter(UploadPolicy::LettersOnly, file_name, content)
            .await
        {
            Ok(letter) => {
                let mut state = self.lock();
                state.upload = StepStatus::Idle;
                state.letters.push(letter.clone());
                Ok(letter)
            }
            Err(error) => Err(self.fail(Step::Upload, error)),
        }
    }

    /// Re-reads the letter list to observe server-side status transitions.
    ///
    /// Letter processing is asynchronous on the backend; PENDING letters move
    /// to PROCESSED or FAILED on their own time. Polling cadence is the
    /// caller's choice.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::OperationInFlight`] or [`WorkflowError::Api`].
    pub async fn refresh_letters(&self) -> Result<Vec<ReferenceLetter>, WorkflowError> {
        self.begin(Step::Refresh)?;
        match self.client.list_reference_letters().await {
            Ok(letters) => {
                let mut state = self.lock();
                state.refresh = StepStatus::Idle;
                state.letters.clone_from(&letters);
                Ok(letters)
            }
            Err(error) => Err(self.fail(Step::Refresh, error)),
        }
    }

    /// Triggers profile generation and stores the result.
    ///
    /// The at-least-one-letter precondition is the backend's (error id 1301).
    /// Locally only the in-flight guard applies; whether a repeat generation
    /// replaces or duplicates an existing profile is the backend's decision.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::OperationInFlight`] or [`WorkflowError::Api`].
    pub async fn generate(&self) -> Result<Profile, WorkflowError> {
        self.begin(Step::Generate)?;
        match self.client.generate_profile().await {
            Ok(profile) => {
                let mut state = self.lock();
                state.generate = StepStatus::Idle;
                state.profile = ProfileState::Loaded(profile.clone());
                Ok(profile)
            }
            Err(error) => Err(self.fail(Step::Generate, error)),
        }
    }

    /// Starts a summary edit seeded from the loaded profile and returns the
    /// initial draft text.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::ProfileNotLoaded`] when no profile is loaded.
    pub fn begin_edit(&self) -> Result<String, WorkflowError> {
        let mut state = self.lock();
        let summary = state
            .profile
            .loaded()
            .map(|profile| profile.summary.clone())
            .ok_or(WorkflowError::ProfileNotLoaded)?;
        state.draft_summary = Some(summary.clone());
        Ok(summary)
    }

    /// Replaces the draft text of the edit in progress.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NoEditInProgress`] when no edit was started.
    pub fn set_draft_summary(&self, text: &str) -> Result<(), WorkflowError> {
        let mut state = self.lock();
        if state.draft_summary.is_none() {
            return Err(WorkflowError::NoEditInProgress);
        }
        state.draft_summary = Some(text.to_owned());
        Ok(())
    }

    /// Discards the draft; the last committed profile stays as-is. A stored
    /// save failure is cleared with it.
    pub fn cancel_edit(&self) {
        let mut state = self.lock();
        state.draft_summary = None;
        if !state.update.is_in_flight() {
            state.update = StepStatus::Idle;
        }
    }

    /// Commits the draft summary via the backend.
    ///
    /// On success the returned profile replaces the loaded one and the draft
    /// is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::OperationInFlight`] when a save is
    /// outstanding, [`WorkflowError::NoEditInProgress`] without a draft, or
    /// [`WorkflowError::Api`] when validation or the backend rejects it.
    pub async fn save_summary(&self) -> Result<Profile, WorkflowError> {
        let draft = {
            let mut state = self.lock();
            if state.update.is_in_flight() {
                tracing::debug!(step = %Step::Update, "trigger suppressed, operation already in flight");
                return Err(WorkflowError::OperationInFlight { step: Step::Update });
            }
            let draft = state
                .draft_summary
                .clone()
                .ok_or(WorkflowError::NoEditInProgress)?;
            state.update = StepStatus::InFlight;
            draft
        };
        match self.client.update_profile(&draft).await {
            Ok(profile) => {
                let mut state = self.lock();
                state.update = StepStatus::Idle;
                state.profile = ProfileState::Loaded(profile.clone());
                state.draft_summary = None;
                Ok(profile)
            }
            Err(error) => Err(self.fail(Step::Update, error)),
        }
    }

    /// Tailors the loaded profile against a job description.
    ///
    /// On success the match is stored and the view switches to the tailored
    /// rendition. The underlying profile is never mutated, and a failure
    /// leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::OperationInFlight`] when a tailoring request
    /// is outstanding, [`WorkflowError::ProfileNotLoaded`] without a loaded
    /// profile, or [`WorkflowError::Api`] when validation or the backend
    /// rejects the description.
    pub async fn tailor(&self, job_description: &str) -> Result<JobMatch, WorkflowError> {
        {
            let mut state = self.lock();
            if state.tailor.is_in_flight() {
                tracing::debug!(step = %Step::Tailor, "trigger suppressed, operation already in flight");
                return Err(WorkflowError::OperationInFlight { step: Step::Tailor });
            }
            if state.profile.loaded().is_none() {
                return Err(WorkflowError::ProfileNotLoaded);
            }
            state.tailor = StepStatus::InFlight;
        }
        match self.client.tailor_profile(job_description).await {
            Ok(job_match) => {
                let mut state = self.lock();
                state.tailor = StepStatus::Idle;
                state.job_match = Some(job_match.clone());
                state.view = ProfileView::Tailored;
                Ok(job_match)
            }
            Err(error) => Err(self.fail(Step::Tailor, error)),
        }
    }

    /// Downloads the CV for the loaded profile, the tailored variant when
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::OperationInFlight`] when a download is
    /// outstanding, [`WorkflowError::ProfileNotLoaded`] without a loaded
    /// profile, [`WorkflowError::NoTailoredProfile`] when `tailored` is set
    /// but no tailoring result exists, or [`WorkflowError::Api`] for backend
    /// failures.
    pub async fn download_cv(&self, tailored: bool) -> Result<Vec<u8>, WorkflowError> {
        let (profile_id, job_match_id) = {
            let mut state = self.lock();
            if state.download.is_in_flight() {
                tracing::debug!(step = %Step::Download, "trigger suppressed, operation already in flight");
                return Err(WorkflowError::OperationInFlight {
                    step: Step::Download,
                });
            }
            let profile_id = state
                .profile
                .loaded()
                .map(|profile| profile.id)
                .ok_or(WorkflowError::ProfileNotLoaded)?;
            let job_match_id = if tailored {
                let id = state
                    .job_match
                    .as_ref()
                    .map(|job_match| job_match.id)
                    .ok_or(WorkflowError::NoTailoredProfile)?;
                Some(id)
            } else {
                None
            };
            state.download = StepStatus::InFlight;
            (profile_id, job_match_id)
        };
        match self.client.download_cv(profile_id, job_match_id).await {
            Ok(bytes) => {
                self.finish(Step::Download);
                Ok(bytes)
            }
            Err(error) => Err(self.fail(Step::Download, error)),
        }
    }

    /// Switches between the standard and tailored renditions of the profile.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NoTailoredProfile`] when asked for the
    /// tailored view before any tailoring result exists.
    pub fn set_view(&self, view: ProfileView) -> Result<(), WorkflowError> {
        let mut state = self.lock();
        if view == ProfileView::Tailored && state.job_match.is_none() {
            return Err(WorkflowError::NoTailoredProfile);
        }
        state.view = view;
        Ok(())
    }

    /// Current status of one operation slot.
    #[must_use]
    pub fn step_status(&self, step: Step) -> StepStatus {
        self.lock().step(step).clone()
    }

    /// Current position in the canonical upload, generate, edit flow.
    #[must_use]
    pub fn stage(&self) -> WorkflowStage {
        self.lock().stage()
    }

    /// Point-in-time copy of the whole session state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> WorkflowSnapshot {
        let state = self.lock();
        WorkflowSnapshot {
            stage: state.stage(),
            profile: state.profile.clone(),
            letters: state.letters.clone(),
            job_match: state.job_match.clone(),
            view: state.view,
            draft_summary: state.draft_summary.clone(),
        }
    }
}
