use super::reduce;
use super::Event;
use super::Form;
use super::SubmissionState;
use super::SubmitError;
use crate::domain::WaitlistRequest;
use crate::waitlist_client::WaitlistClient;

/// Owns the email input and the submission state for one visitor, and runs
/// one request/response cycle per `submit`.
///
/// The in-flight gate lives here, not in the page: `begin_submit` refuses to
/// start while a submission is `Submitting`, so at most one outbound call is
/// ever pending.
#[derive(Debug, Default)]
pub struct WaitlistSubmitter {
    form: Form,
}

impl WaitlistSubmitter {
    pub fn new() -> Self { Self::default() }

    pub fn email(&self) -> &str { &self.form.email }

    pub fn state(&self) -> &SubmissionState { &self.form.state }

    pub fn message(&self) -> Option<&str> { self.form.state.message() }

    pub fn is_submitting(&self) -> bool { self.form.state.is_submitting() }

    fn dispatch(
        &mut self,
        event: Event,
    ) {
        let form = std::mem::take(&mut self.form);
        self.form = reduce(form, event);
    }

    /// No validation; that is the form boundary's job.
    pub fn update_email(
        &mut self,
        value: impl Into<String>,
    ) {
        self.dispatch(Event::EditEmail(value.into()));
    }

    /// First half of `submit`. Returns the request to send, or `None` if a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<WaitlistRequest> {
        if self.is_submitting() {
            tracing::warn!("Submission already in flight, ignoring");
            return None;
        }
        let request = WaitlistRequest::new(self.form.email.clone());
        self.dispatch(Event::SubmitRequested);
        Some(request)
    }

    /// Second half of `submit`. Always leaves `Submitting`, whatever the
    /// outcome.
    pub fn complete(
        &mut self,
        outcome: Result<(), SubmitError>,
    ) {
        match &outcome {
            Ok(()) => tracing::info!("Joined waitlist"),
            Err(e @ SubmitError::ServiceRejection { status, .. }) => tracing::warn!(
                status = %status,
                error.message = %e,
                "Waitlist service rejected signup"
            ),
            Err(e @ SubmitError::TransportFailure(_)) => tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Could not reach waitlist service"
            ),
        }
        self.dispatch(Event::ResponseReceived(outcome));
    }

    /// Send the current email to the waitlist. Returns `false` (and sends
    /// nothing) if a submission is already in flight.
    #[tracing::instrument(
        name = "Submitting waitlist signup",
        skip_all,
        fields(waitlist_email = tracing::field::Empty)
    )]
    pub async fn submit(
        &mut self,
        client: &WaitlistClient,
    ) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        tracing::Span::current()
            .record("waitlist_email", tracing::field::display(request.email()));

        let outcome = client.join(&request).await;
        self.complete(outcome);
        true
    }
}
