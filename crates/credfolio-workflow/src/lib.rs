//! Multi-step workflow over the credfolio API client: upload reference
//! letters, generate a profile, edit its summary, tailor it against a job
//! description, and download the CV.
//!
//! [`ProfileWorkflow`] holds the session state behind per-operation status
//! slots; callers observe it through [`WorkflowSnapshot`]. An error in one
//! step never clears state owned by another.

pub mod controller;
pub mod state;

pub use controller::{ProfileWorkflow, WorkflowError};
pub use state::{ProfileState, ProfileView, Step, StepStatus, WorkflowSnapshot, WorkflowStage};
