use actix_web::web;

use crate::handlers::{donate, portfolio};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/donate")
            .route(web::get().to(donate::get_donation_info))
    );

    cfg.service(
        web::scope("/portfolio")
            .service(
                web::resource("")
                    .route(web::get().to(portfolio::list_portfolio))
            )
            .service(
                web::resource("/{category_id}")
                    .route(web::get().to(portfolio::get_portfolio_category))
            )
    );
}
