use super::{AppContext, AppError};
use chrono::NaiveDate;
use hailcast_core::model::choropleth::ChoroplethMap;
use hailcast_core::model::feature;

/// one full pass of the pipeline: a feature row per zone, model inference,
/// choropleth render. everything is recomputed from the three inputs; the
/// host shell decides when a cycle runs and nothing is retained between
/// cycles.
pub fn run_cycle(
    context: &AppContext,
    date: &NaiveDate,
    pickup_hour: u32,
    is_weather_bad: bool,
) -> Result<String, AppError> {
    if pickup_hour > 23 {
        return Err(AppError::Query(format!(
            "pickup hour {pickup_hour} outside 0-23"
        )));
    }
    let rows = feature::build_features(date, pickup_hour, is_weather_bad, &context.zones);
    log::debug!(
        "built {} feature rows for {date} {pickup_hour:02}:00 (bad weather: {is_weather_bad})",
        rows.len()
    );
    let predictions = context.model.predict(&rows)?;
    let map = ChoroplethMap::new(&context.zones, &predictions);
    log::debug!(
        "rendering demand range [{:.2}, {:.2}] over {} zones",
        map.scale().min,
        map.scale().max,
        map.zones().len()
    );
    Ok(map.to_html())
}
