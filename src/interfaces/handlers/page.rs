use actix_web::{web, HttpResponse, Responder};

use crate::{
    entities::page::{HeroQuery, ScrollQuery, ScrollResponse},
    use_cases::{
        hero::HeroTimeline,
        scroll::{navbar_scrolled, scroll_effects},
    },
};

pub async fn get_scroll_effects(query: web::Query<ScrollQuery>) -> impl Responder {
    let ScrollQuery { scroll_y, viewport_height } = query.into_inner();

    HttpResponse::Ok().json(ScrollResponse {
        effects: scroll_effects(scroll_y, viewport_height),
        navbar_scrolled: navbar_scrolled(scroll_y),
    })
}

pub async fn get_hero_frame(query: web::Query<HeroQuery>) -> impl Responder {
    HttpResponse::Ok().json(HeroTimeline::frame_at(query.elapsed_ms))
}
