pub mod catalog;
pub mod jordan_spots;
