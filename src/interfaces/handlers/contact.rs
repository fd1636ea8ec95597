use actix_web::{http::StatusCode, web, Either, HttpResponse, Responder};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    entities::contact::{ContactSubmission, SubmissionOutcome},
    use_cases::extractors::ClientIp,
    utils::clock::now_ms,
    AppState,
};

pub fn outcome_status(outcome: &SubmissionOutcome) -> StatusCode {
    match outcome {
        SubmissionOutcome::BotDiscarded | SubmissionOutcome::Sent => StatusCode::OK,
        SubmissionOutcome::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        SubmissionOutcome::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        SubmissionOutcome::SendFailed => StatusCode::BAD_GATEWAY,
    }
}

/// Accepts the contact form either as JSON or as a urlencoded form post
/// and always answers with `{success, message}`.
pub async fn submit_contact(
    state: web::Data<AppState>,
    ClientIp(client_ip): ClientIp,
    body: Either<web::Json<ContactSubmission>, web::Form<ContactSubmission>>,
) -> impl Responder {
    let submission = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let span = tracing::info_span!(
        "contact_submission",
        request_id = %Uuid::new_v4(),
        client_ip = %client_ip,
    );

    let outcome = state
        .contact_handler
        .submit(submission, now_ms())
        .instrument(span)
        .await;

    tracing::info!(outcome = outcome.label(), "Contact submission handled");

    HttpResponse::build(outcome_status(&outcome)).json(outcome.result())
}
