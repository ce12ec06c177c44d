use async_trait::async_trait;
use std::fmt;

use crate::db::catalog::SpotCatalog;
use crate::models::{itinerary::Itinerary, preferences::TripPreferences};

#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryError {
    InvalidDayCount { days: i64 },
    NoMatchingSpots,
    EmptyItinerary,
    UpstreamUnavailable(String),
    UpstreamMalformedResponse(String),
}

impl ItineraryError {
    /// Whether the caller can fix this by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ItineraryError::InvalidDayCount { .. }
                | ItineraryError::NoMatchingSpots
                | ItineraryError::EmptyItinerary
        )
    }
}

impl fmt::Display for ItineraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItineraryError::InvalidDayCount { .. } => write!(f, "Days must be between 1 and 14"),
            ItineraryError::NoMatchingSpots => write!(
                f,
                "No spots match your preferences. Try adjusting your filters (interests, famous places, hidden spots, or cultural experiences)."
            ),
            ItineraryError::EmptyItinerary => write!(
                f,
                "Unable to generate itinerary. Please try adjusting your preferences."
            ),
            ItineraryError::UpstreamUnavailable(msg) => {
                write!(f, "Itinerary service unavailable: {}", msg)
            }
            ItineraryError::UpstreamMalformedResponse(msg) => {
                write!(f, "Itinerary service returned an unusable response: {}", msg)
            }
        }
    }
}

impl std::error::Error for ItineraryError {}

/// A way of turning trip preferences into a day-by-day itinerary.
#[async_trait]
pub trait ItineraryStrategy: Send + Sync {
    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        catalog: &SpotCatalog,
        preferences: &TripPreferences,
    ) -> Result<Itinerary, ItineraryError>;
}
