use crate::model::zone::ZoneId;
use serde::{Deserialize, Serialize};

/// the fixed-schema input record consumed by the demand model for one zone.
/// every field is computed eagerly at construction; rows built for a single
/// request differ only in the zone-derived fields.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FeatureRow {
    pub pickup_hour: u32,
    pub month: u32,
    pub day_of_month: u32,
    /// Sunday=1 through Saturday=7
    pub day_of_week: u8,
    pub is_weekend: bool,
    pub zone_id: ZoneId,
    pub is_weather_bad: bool,
    pub is_tourist_zone: bool,
    pub is_airport_station: bool,
}

impl FeatureRow {
    /// model-facing column names in the order the artifact was trained with.
    /// these are the training dataframe's column spellings, not this crate's
    /// field names.
    pub const COLUMN_NAMES: [&'static str; 9] = [
        "pickup_hour",
        "month",
        "dayofmonth",
        "day_of_week",
        "is_weekend",
        "PULocationID",
        "is_weather_bad",
        "is_tourist_zone",
        "is_airport_station",
    ];

    /// flattens the row to the numeric vector fed to the model, in
    /// [`FeatureRow::COLUMN_NAMES`] order. booleans encode as 0/1.
    pub fn to_values(&self) -> [f64; 9] {
        [
            self.pickup_hour as f64,
            self.month as f64,
            self.day_of_month as f64,
            self.day_of_week as f64,
            self.is_weekend as u8 as f64,
            self.zone_id.0 as f64,
            self.is_weather_bad as u8 as f64,
            self.is_tourist_zone as u8 as f64,
            self.is_airport_station as u8 as f64,
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_values_order_and_encoding() {
        let row = FeatureRow {
            pickup_hour: 12,
            month: 6,
            day_of_month: 15,
            day_of_week: 7,
            is_weekend: true,
            zone_id: ZoneId(132),
            is_weather_bad: false,
            is_tourist_zone: false,
            is_airport_station: true,
        };
        assert_eq!(
            row.to_values(),
            [12.0, 6.0, 15.0, 7.0, 1.0, 132.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(row.to_values().len(), FeatureRow::COLUMN_NAMES.len());
    }
}
