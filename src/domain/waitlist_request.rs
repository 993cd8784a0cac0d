use serde::Serialize;

/// The body of a signup: `{"email": "..."}`. Built once, when a submission
/// starts, from whatever is in the input at that moment. The value is sent
/// exactly as typed (no trimming, no lowercasing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistRequest {
    email: String,
}

impl WaitlistRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str { &self.email }
}
