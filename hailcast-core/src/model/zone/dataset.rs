use super::{ZoneError, ZoneId, ZoneRecord, ZoneSourceFormat};
use geo_types::Geometry;
use indexmap::IndexMap;
use shapefile::dbase::FieldValue;
use std::path::Path;

/// the full set of zones from the loaded dataset, keyed by zone id.
/// iteration order follows the source file.
#[derive(Clone, Debug, Default)]
pub struct ZoneDataset {
    zones: IndexMap<ZoneId, ZoneRecord>,
}

impl ZoneDataset {
    /// builds a dataset from already-decoded records. a repeated zone id
    /// keeps its first occurrence.
    pub fn from_records(records: Vec<ZoneRecord>) -> ZoneDataset {
        let mut zones: IndexMap<ZoneId, ZoneRecord> = IndexMap::with_capacity(records.len());
        for record in records {
            if zones.contains_key(&record.id) {
                log::warn!(
                    "duplicate zone id {} in dataset, keeping the first occurrence",
                    record.id
                );
                continue;
            }
            zones.insert(record.id, record);
        }
        ZoneDataset { zones }
    }

    /// reads the dataset from an ESRI shapefile or a GeoJSON FeatureCollection.
    /// the id and name columns are looked up in the attribute table of each
    /// polygon.
    pub fn from_file(
        path: &Path,
        format: ZoneSourceFormat,
        id_column: &str,
        name_column: &str,
    ) -> Result<ZoneDataset, ZoneError> {
        let records = match format {
            ZoneSourceFormat::GeoJson => read_geojson(path, id_column, name_column),
            ZoneSourceFormat::Shapefile => read_shapefile(path, id_column, name_column),
        }?;
        Ok(ZoneDataset::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, id: &ZoneId) -> Option<&ZoneRecord> {
        self.zones.get(id)
    }

    pub fn contains(&self, id: &ZoneId) -> bool {
        self.zones.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneRecord> {
        self.zones.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ZoneId> {
        self.zones.keys()
    }
}

/// reads zone polygons from a GeoJSON FeatureCollection where each feature
/// carries the id and name columns in its properties.
fn read_geojson(
    path: &Path,
    id_column: &str,
    name_column: &str,
) -> Result<Vec<ZoneRecord>, ZoneError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ZoneError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let geojson_value = contents
        .parse::<geojson::GeoJson>()
        .map_err(|e| ZoneError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let collection = match geojson_value {
        geojson::GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(ZoneError::Parse {
                path: path.to_path_buf(),
                message: String::from("zone dataset must be a GeoJSON FeatureCollection"),
            })
        }
    };

    let mut records = Vec::with_capacity(collection.features.len());
    for (n, feature) in collection.features.into_iter().enumerate() {
        let id = {
            let value = feature.property(id_column).ok_or_else(|| {
                deserialize_error(id_column, path, format!("missing from feature {n}"))
            })?;
            zone_id_from_property(value).ok_or_else(|| {
                deserialize_error(
                    id_column,
                    path,
                    format!("cannot read '{value}' in feature {n} as an integer id"),
                )
            })?
        };
        let name = feature
            .property(name_column)
            .and_then(|value| value.as_str())
            .ok_or_else(|| {
                deserialize_error(
                    name_column,
                    path,
                    format!("missing or non-string in feature {n}"),
                )
            })?
            .to_string();
        let geom_json = feature.geometry.ok_or_else(|| {
            deserialize_error("geometry", path, format!("no geometry in feature {n}"))
        })?;
        let geometry: Geometry<f64> = geom_json.try_into().map_err(|e| {
            deserialize_error(
                "geometry",
                path,
                format!("failure decoding feature {n} geometry: {e}"),
            )
        })?;
        records.push(ZoneRecord { id, name, geometry });
    }
    Ok(records)
}

/// reads zone polygons and attributes from a shapefile (.shp + .dbf pair).
fn read_shapefile(
    path: &Path,
    id_column: &str,
    name_column: &str,
) -> Result<Vec<ZoneRecord>, ZoneError> {
    let mut reader = shapefile::Reader::from_path(path).map_err(|e| ZoneError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut records = Vec::new();
    for (n, row) in reader.iter_shapes_and_records().enumerate() {
        let (shape, attributes) = row.map_err(|e| ZoneError::Parse {
            path: path.to_path_buf(),
            message: format!("failure reading shape record {n}: {e}"),
        })?;
        let id = attributes
            .get(id_column)
            .and_then(zone_id_from_field)
            .ok_or_else(|| {
                deserialize_error(
                    id_column,
                    path,
                    format!("missing or non-numeric in record {n}"),
                )
            })?;
        let name = attributes
            .get(name_column)
            .and_then(zone_name_from_field)
            .ok_or_else(|| {
                deserialize_error(
                    name_column,
                    path,
                    format!("missing or non-character in record {n}"),
                )
            })?;
        let geometry = geometry_from_shape(shape)
            .map_err(|msg| deserialize_error("geometry", path, format!("record {n}: {msg}")))?;
        records.push(ZoneRecord { id, name, geometry });
    }
    Ok(records)
}

/// zone ids appear as JSON numbers in exported GeoJSON but may round-trip
/// through floats or strings depending on the exporter.
fn zone_id_from_property(value: &serde_json::Value) -> Option<ZoneId> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .map(ZoneId)
}

/// dbase stores the id column as Numeric in the reference dataset; accept the
/// other numeric encodings for robustness across exporters.
fn zone_id_from_field(value: &FieldValue) -> Option<ZoneId> {
    match value {
        FieldValue::Numeric(Some(n)) => Some(ZoneId(*n as i64)),
        FieldValue::Integer(i) => Some(ZoneId(*i as i64)),
        FieldValue::Double(d) => Some(ZoneId(*d as i64)),
        FieldValue::Character(Some(s)) => s.trim().parse().ok().map(ZoneId),
        _ => None,
    }
}

fn zone_name_from_field(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Character(Some(s)) => Some(s.trim().to_string()),
        _ => None,
    }
}

fn geometry_from_shape(shape: shapefile::Shape) -> Result<Geometry<f64>, String> {
    match shape {
        shapefile::Shape::Polygon(polygon) => {
            let multi: geo_types::MultiPolygon<f64> = polygon.into();
            Ok(Geometry::MultiPolygon(multi))
        }
        other => Err(format!(
            "unsupported shape type '{}', zone datasets must contain polygons",
            other.shapetype()
        )),
    }
}

fn deserialize_error(col: &str, path: &Path, message: String) -> ZoneError {
    ZoneError::Deserialize {
        col: col.to_string(),
        path: path.to_path_buf(),
        message,
    }
}
