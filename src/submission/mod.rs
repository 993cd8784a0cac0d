//! The signup workflow: an explicit state value, a pure reducer over it, and
//! `WaitlistSubmitter`, which drives one request/response cycle at a time.
//!
//! ```text
//! Idle --submit()--> Submitting --success--> Succeeded
//!                               --failure--> Failed
//! Succeeded --submit()--> Submitting
//! Failed    --submit()--> Submitting
//! ```
mod error;
mod state;
mod submitter;

pub use error::SubmitError;
pub use state::reduce;
pub use state::Event;
pub use state::Form;
pub use state::SubmissionState;
pub use state::REJECTION_FALLBACK;
pub use state::SUCCESS_MESSAGE;
pub use submitter::WaitlistSubmitter;
