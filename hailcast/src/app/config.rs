use hailcast_core::model::zone::ZoneSourceFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// application configuration, deserialized from a TOML file. map center,
/// zoom, and styling are fixed at build time and deliberately absent here.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AppConfig {
    /// trained demand model in the XGBoost JSON format
    pub model_input_file: String,
    /// zone polygon dataset (shapefile or GeoJSON FeatureCollection)
    pub zone_input_file: String,
    /// encoding of the zone dataset; inferred from the file extension when
    /// absent
    pub zone_source_format: Option<ZoneSourceFormat>,
    /// attribute column holding the integer zone id
    #[serde(default = "default_zone_id_column")]
    pub zone_id_column: String,
    /// attribute column holding the human-readable zone name
    #[serde(default = "default_zone_name_column")]
    pub zone_name_column: String,
    /// address the dashboard listens on
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
}

fn default_zone_id_column() -> String {
    String::from("OBJECTID")
}

fn default_zone_name_column() -> String {
    String::from("zone")
}

fn default_listen_address() -> String {
    String::from("0.0.0.0:8080")
}

impl AppConfig {
    /// reads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<AppConfig, config::ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;
        cfg.try_deserialize()
    }

    /// the configured dataset format, falling back to the one implied by the
    /// input file extension.
    pub fn zone_format(&self) -> Option<ZoneSourceFormat> {
        self.zone_source_format
            .or_else(|| ZoneSourceFormat::from_path(Path::new(&self.zone_input_file)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn test_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test").join(name)
    }

    #[test]
    fn test_load_config_with_defaults() {
        let config =
            AppConfig::from_file(&test_file("app.toml")).expect("failed to load test config");
        assert!(config.model_input_file.ends_with("model.json"));
        assert_eq!(config.zone_id_column, "OBJECTID");
        assert_eq!(config.zone_name_column, "zone");
        assert_eq!(config.listen_address, "0.0.0.0:8080");
        assert_eq!(config.zone_format(), Some(ZoneSourceFormat::GeoJson));
    }

    #[test]
    fn test_missing_config_file_fails() {
        assert!(AppConfig::from_file(&test_file("no_such_config.toml")).is_err());
    }

    #[test]
    fn test_format_inference_prefers_explicit_setting() {
        let mut config =
            AppConfig::from_file(&test_file("app.toml")).expect("failed to load test config");
        config.zone_source_format = Some(ZoneSourceFormat::Shapefile);
        assert_eq!(config.zone_format(), Some(ZoneSourceFormat::Shapefile));
    }
}
