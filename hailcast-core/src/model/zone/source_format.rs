use serde::{Deserialize, Serialize};
use std::path::Path;

/// supported encodings for the zone polygon dataset.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZoneSourceFormat {
    Shapefile,
    GeoJson,
}

impl ZoneSourceFormat {
    /// guess the dataset format from a file extension.
    pub fn from_path(path: &Path) -> Option<ZoneSourceFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("shp") => Some(ZoneSourceFormat::Shapefile),
            Some("geojson") | Some("json") => Some(ZoneSourceFormat::GeoJson),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ZoneSourceFormat::from_path(Path::new("taxi_zones/taxi_zones.shp")),
            Some(ZoneSourceFormat::Shapefile)
        );
        assert_eq!(
            ZoneSourceFormat::from_path(Path::new("zones.geojson")),
            Some(ZoneSourceFormat::GeoJson)
        );
        assert_eq!(
            ZoneSourceFormat::from_path(Path::new("zones.json")),
            Some(ZoneSourceFormat::GeoJson)
        );
        assert_eq!(ZoneSourceFormat::from_path(Path::new("zones.csv")), None);
        assert_eq!(ZoneSourceFormat::from_path(Path::new("zones")), None);
    }
}
