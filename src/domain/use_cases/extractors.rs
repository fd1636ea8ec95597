use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{utils::get_client_ip::get_client_ip, AppState};

/// Extractor for the caller's address, honouring `X-Forwarded-For` only
/// when the deployment says a trusted proxy sits in front.
/// Usage: Add `ip: ClientIp` as a parameter to your handler function.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl FromRequest for ClientIp {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let trust = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.trust_x_forwarded_for)
            .unwrap_or(false);

        ready(Ok(ClientIp(get_client_ip(req, trust))))
    }
}
