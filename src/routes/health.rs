use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::db::catalog::SpotCatalog;
use crate::services::itinerary::interface::ItineraryStrategy;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    strategy: String,
    spots: usize,
    version: String,
}

/*
    /
*/
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Discover Jordan API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "spots": "/spots",
            "generate": "/generate"
        }
    }))
}

/*
    /health
*/
pub async fn health_check(
    catalog: web::Data<Arc<SpotCatalog>>,
    strategy: web::Data<Arc<dyn ItineraryStrategy>>,
) -> impl Responder {
    let health = HealthStatus {
        status: "ok".to_string(),
        strategy: strategy.name().to_string(),
        spots: catalog.len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(health)
}
