use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the CoGaineum site API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "artist": "CoGaineum",
        "contact": "/api/v1/contact",
        "health": "/api/v1/health"
    }))
}
