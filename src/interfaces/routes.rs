use actix_web::web;

use crate::handlers::home::home;

mod contact;
mod content;
mod page;
mod system;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(contact::config_routes)
            .configure(page::config_routes)
            .configure(content::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
