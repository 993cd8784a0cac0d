use super::SubmitError;

pub const SUCCESS_MESSAGE: &str = "🎉 You're on the list! We'll notify you soon.";

/// Shown when the service rejects a signup without saying why.
pub const REJECTION_FALLBACK: &str = "Failed to join waitlist.";

/// Exactly one is active at a time. A new submission may start from any state
/// except `Submitting`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    /// `None` when the failure carried no usable text; the message region
    /// then stays as it was when the attempt started (empty).
    Failed(Option<String>),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool { matches!(self, Self::Submitting) }

    /// The text for the message region, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(msg) => Some(msg),
            Self::Failed(msg) => msg.as_deref(),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Everything the landing page form owns: the input value and where the
/// current submission is at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub email: String,
    pub state: SubmissionState,
}

#[derive(Debug)]
pub enum Event {
    EditEmail(String),
    SubmitRequested,
    ResponseReceived(Result<(), SubmitError>),
}

/// Pure transition function; no I/O happens here. Building the outbound
/// request is left to the caller, since it only depends on `form.email` at
/// the moment `SubmitRequested` is accepted.
pub fn reduce(
    form: Form,
    event: Event,
) -> Form {
    match event {
        Event::EditEmail(email) => Form { email, ..form },

        // one request in flight at a time
        Event::SubmitRequested if form.state.is_submitting() => form,
        // entering `Submitting` is what clears the previous message
        Event::SubmitRequested => Form {
            state: SubmissionState::Submitting,
            ..form
        },

        // a reply with nothing in flight is stale
        Event::ResponseReceived(_) if !form.state.is_submitting() => form,
        Event::ResponseReceived(Ok(())) => Form {
            email: String::new(),
            state: SubmissionState::Succeeded(SUCCESS_MESSAGE.to_string()),
        },
        Event::ResponseReceived(Err(e)) => Form {
            state: SubmissionState::Failed(failure_message(&e)),
            ..form
        },
    }
}

/// Rejections always have text (service message or fallback). Transport
/// errors may not; an empty one yields `None`, and no fallback is
/// substituted.
fn failure_message(e: &SubmitError) -> Option<String> {
    let msg = e.to_string();
    (!msg.is_empty()).then_some(msg)
}
