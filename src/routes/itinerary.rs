use actix_web::{web, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::json;
use std::sync::Arc;

use crate::db::catalog::SpotCatalog;
use crate::models::preferences::Preferences;
use crate::services::itinerary::interface::{ItineraryError, ItineraryStrategy};

fn error_response(err: &ItineraryError) -> HttpResponse {
    let body = json!({ "detail": err.to_string() });
    if err.is_client_error() {
        warn!("Itinerary request rejected: {}", err);
        HttpResponse::BadRequest().json(body)
    } else {
        error!("Itinerary generation failed: {}", err);
        HttpResponse::BadGateway().json(body)
    }
}

/*
    /generate
*/
pub async fn generate(
    catalog: web::Data<Arc<SpotCatalog>>,
    strategy: web::Data<Arc<dyn ItineraryStrategy>>,
    input: web::Json<Preferences>,
) -> impl Responder {
    let preferences = match input.into_inner().validate() {
        Ok(preferences) => preferences,
        Err(err) => return error_response(&err),
    };

    match strategy.generate(&catalog, &preferences).await {
        Ok(itinerary) => {
            info!(
                "Generated {}-day itinerary with {} stops using {}",
                itinerary.days,
                itinerary.total_stops(),
                strategy.name()
            );
            HttpResponse::Ok().json(itinerary)
        }
        Err(err) => error_response(&err),
    }
}
