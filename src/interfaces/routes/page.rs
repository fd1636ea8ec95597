use actix_web::web;

use crate::handlers::page;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/page")
            .service(
                web::resource("/scroll")
                    .route(web::get().to(page::get_scroll_effects))
            )
            .service(
                web::resource("/hero")
                    .route(web::get().to(page::get_hero_frame))
            )
    );
}
