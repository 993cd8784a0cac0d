use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

use crate::submission::WaitlistSubmitter;

/// `GET /`
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_landing(&WaitlistSubmitter::new()))
}

/// Runs in the browser on submit. Each POST gets its own submitter server
/// side, so the in-flight gate has to be carried into the page: a second
/// submit is cancelled, the button is disabled and relabelled. The input is
/// made read-only rather than disabled, since disabled controls are left out
/// of the form data.
pub const SUBMIT_GUARD: &str = "if (this.dataset.submitting) return false; \
this.dataset.submitting = '1'; \
this.email.readOnly = true; \
this.querySelector('button').disabled = true; \
this.querySelector('button').textContent = 'Submitting...'; \
return true;";

/// Render the landing page from the form's current state.
///
/// The input and the button are disabled while a submission is in flight,
/// and the message paragraph only exists when there is something to say.
/// Everything interpolated is escaped.
pub fn render_landing(submitter: &WaitlistSubmitter) -> String {
    let email = htmlescape::encode_attribute(submitter.email());
    let (disabled, label) = match submitter.is_submitting() {
        true => (" disabled", "Submitting..."),
        false => ("", "Join Waitlist"),
    };
    let guard = htmlescape::encode_attribute(SUBMIT_GUARD);
    let message = match submitter.message() {
        Some(msg) => format!(
            r#"<p class="message">{}</p>"#,
            htmlescape::encode_minimal(msg)
        ),
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>CutFreak - Join the waitlist</title>
    <style>
      body {{ margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #000; font-family: sans-serif; }}
      video {{ position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; z-index: 0; }}
      .overlay {{ position: absolute; inset: 0; background: rgba(0, 0, 0, 0.6); z-index: 1; }}
      .card {{ position: relative; z-index: 2; max-width: 32rem; margin: 0 1rem; padding: 2.5rem; text-align: center; color: #fff;
               background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.2); border-radius: 1rem; backdrop-filter: blur(12px); }}
      h1 span {{ color: #60a5fa; }}
      form {{ display: flex; gap: 1rem; }}
      input {{ flex: 1; padding: 0.75rem 1.25rem; border-radius: 0.5rem; border: 1px solid rgba(255, 255, 255, 0.2); background: rgba(255, 255, 255, 0.1); color: #fff; }}
      button {{ padding: 0.75rem 1.5rem; border: 0; border-radius: 0.5rem; font-weight: 600; color: #fff; background: linear-gradient(to right, #3b82f6, #a855f7, #ec4899); }}
      button:disabled {{ opacity: 0.5; cursor: not-allowed; }}
      .message {{ margin-top: 1rem; color: #4ade80; font-weight: 500; }}
      .badge {{ display: inline-flex; align-items: center; gap: 0.75rem; margin-top: 1.5rem; padding: 0.6rem 1.5rem; border-radius: 9999px;
                background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.2); font-weight: 600; }}
    </style>
  </head>
  <body>
    <video src="/bg.mp4" autoplay loop muted playsinline></video>
    <div class="overlay"></div>
    <div class="card">
      <h1>Color grade your videos with <span>AI</span></h1>
      <p>Join the waitlist to get notified on release</p>
      <!-- POST, otherwise the email ends up in the url -->
      <form action="/waitlist" method="post" onsubmit="{guard}">
        <input type="email" name="email" required placeholder="Enter your email" value="{email}"{disabled} />
        <button type="submit"{disabled}>{label}</button>
      </form>
      {message}
      <div class="badge">
        <img src="/playstore.svg" alt="Play Store" width="22" height="22" />
        <span>Coming soon on Play Store</span>
      </div>
    </div>
  </body>
</html>
"#
    )
}
