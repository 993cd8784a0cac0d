use std::fmt::Debug;

use reqwest::StatusCode;

use super::REJECTION_FALLBACK;
use crate::utils::error_chain_fmt;

/// Everything that can go wrong with a signup. `Display` is the text shown to
/// the visitor, so keep it human.
#[derive(thiserror::Error)]
pub enum SubmitError {
    /// The service answered, but not with a 2xx. `message` is only ever a
    /// non-empty string taken from the response body.
    #[error("{}", .message.as_deref().unwrap_or(REJECTION_FALLBACK))]
    ServiceRejection {
        status: StatusCode,
        message: Option<String>,
    },
    /// No structured answer: network error, or a body that isn't JSON.
    #[error(transparent)]
    TransportFailure(#[from] anyhow::Error),
}

impl Debug for SubmitError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
