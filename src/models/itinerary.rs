use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::spot::Spot;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub description: String,
    pub tips: String,
}

impl From<&Spot> for Stop {
    fn from(spot: &Spot) -> Self {
        Self {
            name: spot.name.clone(),
            description: spot.description.clone(),
            tips: spot.tips_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub stops: Vec<Stop>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Itinerary {
    pub days: u32,
    pub itinerary: Vec<DayPlan>,
    pub generated_at: DateTime<Utc>,
}

impl Itinerary {
    pub fn new(days: u32, itinerary: Vec<DayPlan>) -> Self {
        Self {
            days,
            itinerary,
            generated_at: Utc::now(),
        }
    }

    pub fn total_stops(&self) -> usize {
        self.itinerary.iter().map(|d| d.stops.len()).sum()
    }
}
