use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;

use crate::db::catalog::SpotCatalog;
use crate::db::jordan_spots::{is_famous, is_hidden};
use crate::models::{
    itinerary::{DayPlan, Itinerary, Stop},
    preferences::TripPreferences,
    spot::{Category, Spot},
};
use crate::services::itinerary::interface::{ItineraryError, ItineraryStrategy};

/// Local filter-and-distribute itinerary builder. Needs no network access.
#[derive(Debug, Default, Clone)]
pub struct RuleBasedGenerator;

impl RuleBasedGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ItineraryStrategy for RuleBasedGenerator {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    async fn generate(
        &self,
        catalog: &SpotCatalog,
        preferences: &TripPreferences,
    ) -> Result<Itinerary, ItineraryError> {
        generate_itinerary(catalog, preferences)
    }
}

pub fn generate_itinerary(
    catalog: &SpotCatalog,
    preferences: &TripPreferences,
) -> Result<Itinerary, ItineraryError> {
    let selected = select_spots(catalog, preferences)?;
    let capped = cap_spots(selected, preferences.max_stops());
    let days = distribute_across_days(&capped, preferences.days);

    if days.is_empty() {
        return Err(ItineraryError::EmptyItinerary);
    }

    debug!(
        "Generated {} stops over {} of {} days",
        capped.len(),
        days.len(),
        preferences.days
    );

    Ok(Itinerary::new(preferences.days, days))
}

/// Apply interest and inclusion filters, then drop repeated ids.
///
/// Catalog order is preserved throughout.
pub fn select_spots<'a>(
    catalog: &'a SpotCatalog,
    preferences: &TripPreferences,
) -> Result<Vec<&'a Spot>, ItineraryError> {
    let categories = preferences.interest_categories();
    let mut seen = HashSet::new();

    let selected: Vec<&Spot> = catalog
        .spots()
        .iter()
        .filter(|spot| match &categories {
            Some(wanted) => wanted.contains(&spot.category),
            None => true,
        })
        .filter(|spot| preferences.include_famous_places || !is_famous(&spot.name))
        .filter(|spot| preferences.include_hidden_spots || !is_hidden(&spot.name))
        .filter(|spot| {
            preferences.include_cultural_experiences || spot.category != Category::Cultural
        })
        .filter(|spot| seen.insert(spot.id))
        .collect();

    if selected.is_empty() {
        return Err(ItineraryError::NoMatchingSpots);
    }

    Ok(selected)
}

/// Limit the trip to `max_stops`, keeping famous places ahead of the rest.
///
/// Famous places come first in the result. When they alone exceed the limit
/// they are truncated too, so the limit always holds.
pub fn cap_spots(spots: Vec<&Spot>, max_stops: usize) -> Vec<&Spot> {
    if spots.len() <= max_stops {
        return spots;
    }

    let (mut famous, other): (Vec<&Spot>, Vec<&Spot>) =
        spots.into_iter().partition(|spot| is_famous(&spot.name));

    if famous.len() >= max_stops {
        famous.truncate(max_stops);
        return famous;
    }

    let remaining = max_stops - famous.len();
    famous.extend(other.into_iter().take(remaining));
    famous
}

/// Split spots into contiguous day blocks as evenly as possible.
///
/// The first `n % days` days take one extra stop. Days left without stops are
/// skipped rather than renumbered.
pub fn distribute_across_days(spots: &[&Spot], days: u32) -> Vec<DayPlan> {
    if days == 0 {
        return Vec::new();
    }

    let per_day = spots.len() / days as usize;
    let extra = spots.len() % days as usize;

    let mut plans = Vec::new();
    let mut index = 0;
    for day in 1..=days {
        let quota = per_day + usize::from((day as usize) <= extra);
        let end = (index + quota).min(spots.len());
        let stops: Vec<Stop> = spots[index..end].iter().map(|spot| Stop::from(*spot)).collect();
        index = end;

        if !stops.is_empty() {
            plans.push(DayPlan { day, stops });
        }
    }

    plans
}
