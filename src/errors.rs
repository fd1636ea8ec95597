use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

/// Errors the JSON content endpoints answer with.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("Not found: {_0}")]
    NotFound(String),
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Failures of the outbound mail transport. These are logged for the
/// operator and never shown to the person submitting the form.
#[derive(Debug, Display)]
pub enum MailError {
    #[display("Invalid mailbox address: {_0}")]
    Address(String),

    #[display("Failed to build message: {_0}")]
    Build(String),

    #[display("SMTP transport error: {_0}")]
    Transport(String),

    #[display("Mail transport did not answer within {_0}s")]
    Timeout(u64),
}

impl std::error::Error for MailError {}

impl From<lettre::address::AddressError> for MailError {
    fn from(err: lettre::address::AddressError) -> Self {
        MailError::Address(err.to_string())
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::Build(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::Transport(err.to_string())
    }
}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ClipboardError {
    #[display("Clipboard is unavailable")]
    Unavailable,

    #[display("Clipboard write denied: {_0}")]
    Denied(String),
}

impl std::error::Error for ClipboardError {}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn not_found_renders_json_error() {
        let err = AppError::NotFound("Portfolio category 'sculpture'".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Not found: Portfolio category 'sculpture'");
    }

    #[test]
    fn mail_errors_describe_the_cause() {
        assert_eq!(
            MailError::Timeout(10).to_string(),
            "Mail transport did not answer within 10s"
        );
    }
}
