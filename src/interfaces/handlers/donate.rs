use actix_web::{HttpResponse, Responder};

use crate::entities::donation::DonationInfo;

pub async fn get_donation_info() -> impl Responder {
    HttpResponse::Ok().json(DonationInfo::default())
}
