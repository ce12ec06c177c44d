pub mod interface;
pub mod llm;
pub mod rule_based;

use log::info;
use std::sync::Arc;

use crate::config::{AppConfig, ConfigError, StrategyKind};
use interface::ItineraryStrategy;
use llm::LlmItineraryGenerator;
use rule_based::RuleBasedGenerator;

/// Pick the itinerary strategy named by the configuration.
pub fn build_strategy(config: &AppConfig) -> Result<Arc<dyn ItineraryStrategy>, ConfigError> {
    let strategy: Arc<dyn ItineraryStrategy> = match config.strategy {
        StrategyKind::RuleBased => Arc::new(RuleBasedGenerator::new()),
        StrategyKind::Llm => {
            let llm_config = config.llm.clone().ok_or(ConfigError::MissingApiKey)?;
            let generator = LlmItineraryGenerator::new(llm_config).map_err(ConfigError::HttpClient)?;
            info!("Using language model {} for itineraries", generator.model());
            Arc::new(generator)
        }
    };

    info!("Itinerary strategy: {}", strategy.name());
    Ok(strategy)
}
