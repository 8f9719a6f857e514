use super::ZoneId;
use geo_types::Geometry;

/// one polygon from the zone dataset together with the attributes consumed
/// downstream. loaded once at startup and read-only afterward.
#[derive(Clone, Debug)]
pub struct ZoneRecord {
    pub id: ZoneId,
    pub name: String,
    pub geometry: Geometry<f64>,
}
