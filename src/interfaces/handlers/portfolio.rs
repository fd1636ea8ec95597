use actix_web::{web, HttpResponse, Responder};

use crate::{errors::AppError, AppState};

pub async fn list_portfolio(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.portfolio_handler.list())
}

pub async fn get_portfolio_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = state.portfolio_handler.category(&path)?;
    Ok(HttpResponse::Ok().json(category))
}
