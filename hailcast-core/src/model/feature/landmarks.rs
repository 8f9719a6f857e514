use crate::model::zone::ZoneId;

/// zone ids covering the major tourist areas. fixed at build time along with
/// the model that was trained against these flags; not configuration.
pub const TOURIST_ZONES: [i64; 15] = [
    230, 103, 43, 164, 161, 163, 261, 158, 162, 186, 239, 236, 90, 234, 113,
];

/// zone ids containing or directly serving an airport.
pub const AIRPORT_STATIONS: [i64; 6] = [132, 138, 1, 186, 162, 100];

pub fn is_tourist_zone(zone_id: &ZoneId) -> bool {
    TOURIST_ZONES.contains(&zone_id.0)
}

pub fn is_airport_station(zone_id: &ZoneId) -> bool {
    AIRPORT_STATIONS.contains(&zone_id.0)
}
