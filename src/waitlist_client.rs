use reqwest::Client;
use serde_json::Value;

use crate::domain::WaitlistRequest;
use crate::submission::SubmitError;

/// HTTP client for the (external) waitlist service.
///
/// Establishing a connection is expensive, so a single `reqwest::Client` is
/// kept here and the `WaitlistClient` itself is shared across the app via
/// `web::Data`.
#[derive(Debug)]
pub struct WaitlistClient {
    http_client: Client,
    endpoint: String,
}

impl WaitlistClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }

    /// `POST` the signup as JSON. Exactly one request per call; no retry, no
    /// timeout.
    ///
    /// Any 2xx is acceptance, and its body is ignored. Anything else is a
    /// rejection whose body must be JSON; an optional `message` string in it
    /// is passed on verbatim.
    #[tracing::instrument(
        name = "Sending signup to waitlist service",
        skip_all,
        fields(
            waitlist_email = %request.email(),
            endpoint = %self.endpoint,
        )
    )]
    pub async fn join(
        &self,
        request: &WaitlistRequest,
    ) -> Result<(), SubmitError> {
        // `.json` sets `Content-Type: application/json`
        let resp = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body: Value = resp.json().await.map_err(transport_failure)?;
        Err(SubmitError::ServiceRejection {
            status,
            message: rejection_message(&body),
        })
    }
}

/// reqwest's `Display` ends with `for url (...)`; the text ends up on the
/// page, so drop the upstream url (the span already records it).
fn transport_failure(e: reqwest::Error) -> SubmitError {
    SubmitError::TransportFailure(anyhow::Error::from(e.without_url()))
}

/// Only a non-empty string counts as a message; anything else (missing,
/// null, empty, not a string, body not an object) leaves it to the fallback.
fn rejection_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}
