pub mod health;
pub mod itinerary;
pub mod spots;

use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

/// Request body errors come back as a 400 with the same `detail` shape as
/// every other client error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "detail": detail })),
        )
        .into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        .route("/spots", web::get().to(spots::get_spots))
        .route("/generate", web::post().to(itinerary::generate));
}
