//! Simulated form delivery.
//!
//! There is no backend yet: a submission waits [`SUBMIT_DELAY`] standing in
//! for the network round trip and then succeeds.

use std::time::Duration;

use thiserror::Error;

use super::{Application, ContactRequest};

pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission failed: {0}")]
    Transport(String),
}

/// Something a form can deliver.
pub trait Submission: Send + 'static {
    /// Short label for logs (never the payload itself).
    const KIND: &'static str;
}

impl Submission for ContactRequest {
    const KIND: &'static str = "contact";
}

impl Submission for Application {
    const KIND: &'static str = "application";
}

/// Deliver a validated payload.
pub async fn submit<S: Submission>(payload: S) -> Result<(), SubmitError> {
    tracing::info!("Submitting {} form", S::KIND);
    crate::platform::sleep(SUBMIT_DELAY).await;
    drop(payload);
    tracing::debug!("{} form accepted", S::KIND);
    Ok(())
}
