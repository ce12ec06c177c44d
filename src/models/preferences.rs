use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::spot::Category;
use crate::services::itinerary::interface::ItineraryError;

pub const MIN_DAYS: i64 = 1;
pub const MAX_DAYS: i64 = 14;

/// Trip parameters as submitted by the client.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Preferences {
    pub days: i64,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub include_hidden_spots: bool,
    #[serde(default = "default_true")]
    pub include_famous_places: bool,
    #[serde(default = "default_true")]
    pub include_cultural_experiences: bool,
}

fn default_true() -> bool {
    true
}

/// Preferences that passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPreferences {
    pub days: u32,
    /// Normalized interest tokens, first occurrence order.
    pub interests: Vec<String>,
    pub budget: Option<String>,
    pub include_hidden_spots: bool,
    pub include_famous_places: bool,
    pub include_cultural_experiences: bool,
}

impl Preferences {
    pub fn validate(self) -> Result<TripPreferences, ItineraryError> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(ItineraryError::InvalidDayCount { days: self.days });
        }

        let mut interests: Vec<String> = Vec::with_capacity(self.interests.len());
        for raw in &self.interests {
            let token = raw.trim().to_lowercase();
            if !token.is_empty() && !interests.contains(&token) {
                interests.push(token);
            }
        }

        let budget = self
            .budget
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());

        Ok(TripPreferences {
            days: self.days as u32,
            interests,
            budget,
            include_hidden_spots: self.include_hidden_spots,
            include_famous_places: self.include_famous_places,
            include_cultural_experiences: self.include_cultural_experiences,
        })
    }
}

impl TripPreferences {
    /// Categories selected by the interests, or `None` when no interests were
    /// given and every category is acceptable.
    ///
    /// Tokens that name no category select nothing, so a request whose only
    /// interests are unknown yields an empty set.
    pub fn interest_categories(&self) -> Option<BTreeSet<Category>> {
        if self.interests.is_empty() {
            return None;
        }
        Some(
            self.interests
                .iter()
                .filter_map(|i| Category::from_interest(i))
                .collect(),
        )
    }

    /// Upper bound on stops for the whole trip, roughly two per day.
    pub fn max_stops(&self) -> usize {
        self.days as usize * 2
    }
}
