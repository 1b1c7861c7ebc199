//! Typed operations for the backend's four resources: profile, reference
//! letters, job matches, and the generated CV blob.

use credfolio_core::{
    validate_job_description, validate_summary, ClientConfig, JobDescriptionRule, JobMatch,
    Profile, ReferenceLetter, UploadPolicy,
};
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::transport::Transport;

#[derive(Serialize)]
struct UpdateProfileRequest<'a> {
    summary: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TailorRequest<'a> {
    job_description: &'a str,
}

/// Typed client for the credfolio backend REST API.
///
/// One method per backend capability, each a thin typed contract over the
/// shared transport. Client-side validation runs before a request is issued,
/// so obviously invalid input never costs a round trip.
pub struct CredfolioClient {
    transport: Transport,
}

impl CredfolioClient {
    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying HTTP client cannot be
    /// constructed, or [`ApiError::InvalidUrl`] if the configured base URL
    /// does not parse.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            transport: Transport::from_config(config)?,
        })
    }

    /// Fetches the current user's profile.
    ///
    /// # Errors
    ///
    /// - [`ApiError::ProfileNotFound`] when the backend answered a bare 404; a
    ///   structured 404 with error id 1201 is kept as [`ApiError::Api`] (both
    ///   satisfy [`ApiError::is_profile_missing`]).
    /// - [`ApiError::Api`] / [`ApiError::Status`] for any other non-2xx answer.
    /// - [`ApiError::Http`] / [`ApiError::Deserialize`] on network or decode
    ///   failure.
    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        tracing::debug!("fetching profile");
        let url = self.transport.endpoint("profile")?;
        let request = self.transport.client.get(url);
        match Transport::send_json(request, "GET /profile").await {
            Err(ApiError::Status { status: 404 }) => Err(ApiError::ProfileNotFound),
            other => other,
        }
    }

    /// Asks the backend to generate a profile from the uploaded reference
    /// letters.
    ///
    /// The zero-letters precondition is enforced server-side (error id 1301);
    /// the client adds no guard of its own.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`], [`ApiError::Status`], [`ApiError::Http`],
    /// or [`ApiError::Deserialize`] as for any backend call.
    pub async fn generate_profile(&self) -> Result<Profile, ApiError> {
        tracing::debug!("requesting profile generation");
        let url = self.transport.endpoint("profile/generate")?;
        let request = self.transport.client.post(url);
        Transport::send_json(request, "POST /profile/generate").await
    }

    /// Updates the profile summary. Only the summary is client-mutable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the summary is over the
    /// character cap (no request is issued), otherwise the usual backend
    /// failure variants.
    pub async fn update_profile(&self, summary: &str) -> Result<Profile, ApiError> {
        validate_summary(summary)?;
        tracing::debug!("updating profile summary");
        let url = self.transport.endpoint("profile")?;
        let request = self
            .transport
            .client
            .put(url)
            .json(&UpdateProfileRequest { summary });
        Transport::send_json(request, "PUT /profile").await
    }

    /// Uploads one reference letter as a multipart form with a single `file`
    /// field.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the file name fails the policy's
    /// extension allow-list (no request is issued), otherwise the usual
    /// backend failure variants.
    pub async fn upload_reference_letter(
        &self,
        policy: UploadPolicy,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<ReferenceLetter, ApiError> {
        policy.check_file_name(file_name)?;
        tracing::debug!(file_name, "uploading reference letter");
        let part = Part::bytes(content)
            .file_name(file_name.to_owned())
            .mime_str(mime_for_upload(file_name))?;
        let form = Form::new().part("file", part);
        let url = self.transport.endpoint("reference-letters")?;
        let request = self.transport.client.post(url).multipart(form);
        Transport::send_json(request, "POST /reference-letters").await
    }

    /// Re-reads the reference letter list.
    ///
    /// Letter processing is asynchronous server-side; calling this again
    /// observes PENDING letters moving to PROCESSED or FAILED. Polling cadence
    /// is the caller's choice.
    ///
    /// # Errors
    ///
    /// Returns the usual backend failure variants.
    pub async fn list_reference_letters(&self) -> Result<Vec<ReferenceLetter>, ApiError> {
        tracing::debug!("listing reference letters");
        let url = self.transport.endpoint("reference-letters")?;
        let request = self.transport.client.get(url);
        Transport::send_json(request, "GET /reference-letters").await
    }

    /// Tailors the profile against a job description and returns the match.
    ///
    /// The description is trimmed and length-checked locally first; the
    /// trimmed text is what gets sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the description is empty or out
    /// of bounds (no request is issued), otherwise the usual backend failure
    /// variants.
    pub async fn tailor_profile(&self, job_description: &str) -> Result<JobMatch, ApiError> {
        let trimmed = validate_job_description(job_description, &JobDescriptionRule::default())?;
        tracing::debug!(chars = trimmed.chars().count(), "tailoring profile");
        let url = self.transport.endpoint("profile/tailor")?;
        let request = self.transport.client.post(url).json(&TailorRequest {
            job_description: &trimmed,
        });
        Transport::send_json(request, "POST /profile/tailor").await
    }

    /// Downloads the generated CV as raw PDF bytes.
    ///
    /// With `job_match_id` set, the backend renders the tailored variant; the
    /// `jobMatchId` query parameter is omitted entirely otherwise.
    ///
    /// # Errors
    ///
    /// Returns the usual backend failure variants.
    pub async fn download_cv(
        &self,
        profile_id: Uuid,
        job_match_id: Option<Uuid>,
    ) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(%profile_id, tailored = job_match_id.is_some(), "downloading cv");
        let url = self.cv_url(profile_id, job_match_id)?;
        let request = self.transport.client.get(url);
        Transport::send_bytes(request).await
    }

    fn cv_url(&self, profile_id: Uuid, job_match_id: Option<Uuid>) -> Result<Url, ApiError> {
        let mut url = self
            .transport
            .endpoint(&format!("profile/{profile_id}/cv"))?;
        if let Some(job_match_id) = job_match_id {
            url.query_pairs_mut()
                .append_pair("jobMatchId", &job_match_id.to_string());
        }
        Ok(url)
    }
}

/// Content type for the upload part, chosen from the file extension.
fn mime_for_upload(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("md") => "text/markdown",
        _ => "text/plain",
    }
}
