use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::catalog::SpotCatalog;

/*
    /spots
*/
pub async fn get_spots(catalog: web::Data<Arc<SpotCatalog>>) -> impl Responder {
    HttpResponse::Ok().json(catalog.spots())
}
