use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;

use crate::domain::WaitlistEmail;
use crate::routes::render_landing;
use crate::submission::WaitlistSubmitter;
use crate::waitlist_client::WaitlistClient;

#[derive(Deserialize)]
pub struct FormData {
    email: String,
}

fn landing_page(
    status: StatusCode,
    submitter: &WaitlistSubmitter,
) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render_landing(submitter))
}

/// `POST /waitlist`
///
/// Target of the landing page form. Runs one submission and renders the page
/// from the resulting state: the message region shows the outcome, and the
/// input is emptied on success but keeps the email on failure.
///
/// ```sh
///     curl --data 'email=john@foo.com' http://127.0.0.1:8000/waitlist
/// ```
///
/// A missing `email` field is rejected by the `Form` extractor (400). An
/// email that the browser's `type="email" required` would have refused is
/// also 400, and nothing is sent upstream.
#[tracing::instrument(
    name = "Joining waitlist from landing page",
    skip(form, client),
    fields(waitlist_email = %form.email)
)]
pub async fn join_waitlist(
    form: web::Form<FormData>,
    client: web::Data<WaitlistClient>,
) -> HttpResponse {
    let mut submitter = WaitlistSubmitter::new();
    submitter.update_email(form.0.email);

    // browsers strip surrounding whitespace from `type="email"` before the
    // check, so anything padded never reaches us from the real form; the
    // value that *is* sent upstream is still the raw one
    if let Err(e) = WaitlistEmail::parse(submitter.email().to_string()) {
        tracing::warn!(error.message = %e, "Refusing to submit");
        return landing_page(StatusCode::BAD_REQUEST, &submitter);
    }

    submitter.submit(&client).await;
    landing_page(StatusCode::OK, &submitter)
}
