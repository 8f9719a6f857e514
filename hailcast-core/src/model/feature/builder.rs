use super::{calendar, landmarks, FeatureRow};
use crate::model::zone::ZoneDataset;
use chrono::{Datelike, NaiveDate};

/// builds one feature row per zone in the dataset for the selected date,
/// pickup hour, and weather flag. pure function of its inputs; performs no
/// I/O. the date/hour/weather fields are identical across rows, only the
/// zone-derived fields vary.
pub fn build_features(
    date: &NaiveDate,
    pickup_hour: u32,
    is_weather_bad: bool,
    zones: &ZoneDataset,
) -> Vec<FeatureRow> {
    let day_of_week = calendar::demand_day_of_week(date);
    let is_weekend = calendar::is_weekend(day_of_week);
    zones
        .iter()
        .map(|zone| FeatureRow {
            pickup_hour,
            month: date.month(),
            day_of_month: date.day(),
            day_of_week,
            is_weekend,
            zone_id: zone.id,
            is_weather_bad,
            is_tourist_zone: landmarks::is_tourist_zone(&zone.id),
            is_airport_station: landmarks::is_airport_station(&zone.id),
        })
        .collect()
}
