use actix_web::{web, App};
use async_trait::async_trait;
use std::sync::Arc;

use discover_jordan_api::{
    db::catalog::SpotCatalog,
    models::{itinerary::Itinerary, preferences::TripPreferences},
    routes,
    services::itinerary::{
        interface::{ItineraryError, ItineraryStrategy},
        rule_based::RuleBasedGenerator,
    },
};

pub struct TestApp {
    pub catalog: Arc<SpotCatalog>,
    pub strategy: Arc<dyn ItineraryStrategy>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_strategy(Arc::new(RuleBasedGenerator::new()))
    }

    pub fn with_strategy(strategy: Arc<dyn ItineraryStrategy>) -> Self {
        Self {
            catalog: Arc::new(SpotCatalog::jordan()),
            strategy,
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.strategy.clone()))
            .configure(routes::config)
    }
}

/// Strategy standing in for an unreachable language model.
pub struct UnavailableStrategy;

#[async_trait]
impl ItineraryStrategy for UnavailableStrategy {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn generate(
        &self,
        _catalog: &SpotCatalog,
        _preferences: &TripPreferences,
    ) -> Result<Itinerary, ItineraryError> {
        Err(ItineraryError::UpstreamUnavailable(
            "connection refused".to_string(),
        ))
    }
}

/// Strategy standing in for a language model that answers with junk.
pub struct MalformedReplyStrategy;

#[async_trait]
impl ItineraryStrategy for MalformedReplyStrategy {
    fn name(&self) -> &'static str {
        "malformed"
    }

    async fn generate(
        &self,
        _catalog: &SpotCatalog,
        _preferences: &TripPreferences,
    ) -> Result<Itinerary, ItineraryError> {
        Err(ItineraryError::UpstreamMalformedResponse(
            "reply contained no usable days".to_string(),
        ))
    }
}
