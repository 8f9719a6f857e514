use super::{run_cycle, AppContext, AppError};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;
use hailcast_core::model::feature;
use serde::Deserialize;
use std::sync::Arc;

/// shared handler state: the immutable context behind an Arc. handlers only
/// read it, so no locking is involved.
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<AppContext>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/map", get(render_map))
        .with_state(state)
}

#[derive(Deserialize, Debug)]
pub struct MapQuery {
    pub date: String,
    pub hour: u32,
    #[serde(default)]
    pub bad_weather: bool,
}

/// runs one render cycle for the requested inputs and returns the map
/// document. bad inputs are a 400 for this cycle; model failures are a 500
/// for this cycle. neither affects the loaded context.
async fn render_map(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let date = parse_date(&query.date).map_err(|msg| (StatusCode::BAD_REQUEST, msg))?;
    match run_cycle(&state.context, &date, query.hour, query.bad_weather) {
        Ok(html) => Ok(Html(html)),
        Err(AppError::Query(message)) => Err((StatusCode::BAD_REQUEST, message)),
        Err(e) => {
            log::error!("render cycle failed: {e}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// the dashboard page: input controls plus an embedded map frame that
/// reloads on every input change.
async fn dashboard() -> Html<String> {
    let today = chrono::Local::now().date_naive();
    Html(dashboard_page(&today))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("invalid date '{raw}': {e}"))
}

fn dashboard_page(today: &NaiveDate) -> String {
    let day_of_week = feature::demand_day_of_week(today);
    let today_name = feature::day_name(day_of_week).unwrap_or("");
    DASHBOARD_TEMPLATE
        .replace("@TODAY@", &today.format("%Y-%m-%d").to_string())
        .replace("@TODAY_NAME@", today_name)
}

const DASHBOARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Taxi Demand Forecasting</title>
<style>
  body { font: 14px sans-serif; margin: 16px; }
  .controls { display: flex; gap: 24px; align-items: center; margin: 12px 0; }
  .controls label { display: flex; gap: 8px; align-items: center; }
  iframe { width: 100%; height: 600px; border: 1px solid #ccc; }
</style>
</head>
<body>
<h2>Zone-Level Taxi Demand Forecasting</h2>
<p>@TODAY_NAME@, @TODAY@</p>
<div class="controls">
  <label>Date <input type="date" id="date" value="@TODAY@"/></label>
  <label>Pickup hour
    <input type="range" id="hour" min="0" max="23" value="12"/>
    <span id="hour-value">12</span>
  </label>
  <label><input type="checkbox" id="bad-weather"/> Bad weather</label>
</div>
<h3>Heatmap of Predicted Taxi Demand</h3>
<iframe id="map-frame" src="/map?date=@TODAY@&hour=12&bad_weather=false"></iframe>
<script>
  function reload() {
    var date = document.getElementById("date").value;
    var hour = document.getElementById("hour").value;
    var bad = document.getElementById("bad-weather").checked;
    document.getElementById("hour-value").textContent = hour;
    document.getElementById("map-frame").src =
      "/map?date=" + date + "&hour=" + hour + "&bad_weather=" + bad;
  }
  ["date", "hour", "bad-weather"].forEach(function (id) {
    document.getElementById(id).addEventListener("change", reload);
  });
</script>
</body>
</html>
"#;
