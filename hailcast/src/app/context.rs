use super::{AppConfig, AppError};
use hailcast_core::model::demand::DemandModel;
use hailcast_core::model::zone::{ZoneDataset, ZoneError};
use std::path::Path;

/// the resources loaded once at startup and shared read-only with every
/// render cycle: the trained demand model and the zone polygons. built
/// explicitly from configuration rather than cached behind a module global;
/// a load failure is startup-fatal and the process must not serve.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub model: DemandModel,
    pub zones: ZoneDataset,
}

impl TryFrom<&AppConfig> for AppContext {
    type Error = AppError;

    fn try_from(config: &AppConfig) -> Result<AppContext, AppError> {
        let model = DemandModel::from_file(Path::new(&config.model_input_file))?;
        let format = config.zone_format().ok_or_else(|| {
            ZoneError::Build(format!(
                "cannot determine zone dataset format for '{}'; set zone_source_format",
                config.zone_input_file
            ))
        })?;
        let zones = ZoneDataset::from_file(
            Path::new(&config.zone_input_file),
            format,
            &config.zone_id_column,
            &config.zone_name_column,
        )?;
        if zones.is_empty() {
            log::warn!("zone dataset {} contains no zones", config.zone_input_file);
        }
        log::info!(
            "loaded {} zones from {}",
            zones.len(),
            config.zone_input_file
        );
        Ok(AppContext { model, zones })
    }
}
