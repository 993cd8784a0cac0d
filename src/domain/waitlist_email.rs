use validator::ValidateEmail;

/// The "required, shaped like an email" check that the browser applies to
/// `<input type="email" required>`. Only used at the form boundary; the
/// submitter itself never validates.
#[derive(Debug)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        ValidateEmail::validate_email(&email)
            .then_some(Self(email.clone()))
            .ok_or(format!("Invalid email: {email:?}"))
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
