mod builder;
mod calendar;
mod landmarks;
mod row;

pub use builder::build_features;
pub use calendar::{day_name, demand_day_of_week, is_weekend};
pub use landmarks::{is_airport_station, is_tourist_zone, AIRPORT_STATIONS, TOURIST_ZONES};
pub use row::FeatureRow;
