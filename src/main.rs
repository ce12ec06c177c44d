use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use discover_jordan_api::{
    config::AppConfig, db::catalog::load_catalog, middleware::cors::build_cors, routes,
    services::itinerary::build_strategy,
};

fn startup_error(err: impl std::fmt::Display) -> std::io::Error {
    error!("{}", err);
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Discover Jordan API starting...");

    let config = AppConfig::from_env().map_err(startup_error)?;
    let catalog = load_catalog(config.spots_file.as_deref()).map_err(startup_error)?;
    let strategy = build_strategy(&config).map_err(startup_error)?;

    if config.is_production() {
        info!("CORS restricted to {:?}", config.allowed_origins());
    } else {
        info!("CORS open to any origin ({} environment)", config.environment);
    }

    let bind = (config.host.clone(), config.port);
    info!("Binding to {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&config))
            .wrap(Logger::default())
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(strategy.clone()))
            .configure(routes::config)
    })
    .bind(bind)?
    .run()
    .await
}
