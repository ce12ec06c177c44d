use actix_cors::Cors;

use crate::config::AppConfig;

/// Any origin outside production; a fixed allow-list with credentials in it.
pub fn build_cors(config: &AppConfig) -> Cors {
    if !config.is_production() {
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
    }

    config
        .allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
