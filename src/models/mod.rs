pub mod itinerary;
pub mod preferences;
pub mod spot;
