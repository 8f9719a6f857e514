use super::{color_ramp::YL_OR_RD_9, ColorScale, RenderedZone};
use crate::model::demand::Prediction;
use crate::model::zone::{ZoneDataset, ZoneId};
use std::collections::HashMap;

/// fixed reference point of the rendered view.
pub const MAP_CENTER: (f64, f64) = (40.7000, -73.8000);
/// fixed initial zoom of the rendered view.
pub const MAP_ZOOM: f64 = 10.5;

const OUTLINE_COLOR: &str = "black";
const OUTLINE_WEIGHT: f64 = 0.5;
const FILL_OPACITY: f64 = 0.7;
const PLACEHOLDER_FILL: &str = "#d9d9d9";
const LEGEND_CAPTION: &str = "Predicted Taxi Demand";

/// a choropleth of predicted demand over the zone polygons, serializable as a
/// self-contained HTML document (Leaflet from a CDN, data embedded as GeoJSON
/// with per-zone fill colors and tooltips precomputed).
#[derive(Clone, Debug)]
pub struct ChoroplethMap {
    zones: Vec<RenderedZone>,
    scale: ColorScale,
}

impl ChoroplethMap {
    /// left-joins predictions onto zones by id and fixes the color scale over
    /// the joined demand range. zones without a prediction are kept and
    /// rendered with the placeholder fill; predictions for unknown zone ids
    /// are dropped.
    pub fn new(zones: &ZoneDataset, predictions: &[Prediction]) -> ChoroplethMap {
        let by_id: HashMap<ZoneId, f64> = predictions
            .iter()
            .map(|p| (p.zone_id, p.demand))
            .collect();
        let joined: Vec<RenderedZone> = zones
            .iter()
            .map(|zone| RenderedZone {
                zone: zone.clone(),
                demand: by_id.get(&zone.id).copied(),
            })
            .collect();
        let scale = ColorScale::from_values(joined.iter().filter_map(|z| z.demand), YL_OR_RD_9);
        ChoroplethMap {
            zones: joined,
            scale,
        }
    }

    pub fn zones(&self) -> &[RenderedZone] {
        &self.zones
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    fn fill_for(&self, zone: &RenderedZone) -> String {
        match zone.demand {
            Some(demand) => self.scale.hex_for(demand),
            None => PLACEHOLDER_FILL.to_string(),
        }
    }

    /// the joined zones as a GeoJSON FeatureCollection carrying the rendering
    /// properties each polygon needs client-side.
    fn feature_collection(&self) -> geojson::FeatureCollection {
        let features = self
            .zones
            .iter()
            .map(|rendered| {
                let mut properties = serde_json::Map::new();
                properties.insert(
                    String::from("zone"),
                    serde_json::Value::from(rendered.zone.name.clone()),
                );
                properties.insert(
                    String::from("demand"),
                    match rendered.demand {
                        Some(demand) => serde_json::Value::from(demand),
                        None => serde_json::Value::Null,
                    },
                );
                properties.insert(
                    String::from("fill"),
                    serde_json::Value::from(self.fill_for(rendered)),
                );
                properties.insert(
                    String::from("tooltip"),
                    serde_json::Value::from(tooltip_html(&rendered.zone.name, rendered.demand)),
                );
                geojson::Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::new(geojson::Value::from(
                        &rendered.zone.geometry,
                    ))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();
        geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    /// renders the self-contained HTML document.
    pub fn to_html(&self) -> String {
        let collection = geojson::GeoJson::from(self.feature_collection());
        let gradient = self.scale.ramp().stop_hexes().join(", ");
        MAP_TEMPLATE
            .replace("@ZONES@", &collection.to_string())
            .replace("@LAT@", &MAP_CENTER.0.to_string())
            .replace("@LON@", &MAP_CENTER.1.to_string())
            .replace("@ZOOM@", &MAP_ZOOM.to_string())
            .replace("@OUTLINE@", OUTLINE_COLOR)
            .replace("@WEIGHT@", &OUTLINE_WEIGHT.to_string())
            .replace("@OPACITY@", &FILL_OPACITY.to_string())
            .replace("@CAPTION@", LEGEND_CAPTION)
            .replace("@GRADIENT@", &gradient)
            .replace("@MIN@", &format!("{:.2}", self.scale.min))
            .replace("@MAX@", &format!("{:.2}", self.scale.max))
    }
}

fn tooltip_html(zone_name: &str, demand: Option<f64>) -> String {
    match demand {
        Some(demand) => {
            format!("<b>Zone:</b> {zone_name}<br/><b>Taxi Count:</b> {demand:.2}")
        }
        None => format!("<b>Zone:</b> {zone_name}<br/><b>Taxi Count:</b> no prediction"),
    }
}

// zoomSnap 0.5 is required for the fractional initial zoom level.
const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>@CAPTION@</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
  html, body, #map { height: 100%; margin: 0; }
  .legend {
    position: absolute; bottom: 16px; left: 16px; z-index: 1000;
    background: white; padding: 6px 10px; border-radius: 4px;
    box-shadow: 0 0 4px rgba(0, 0, 0, 0.4); font: 12px sans-serif;
  }
  .legend .bar { width: 180px; height: 10px; margin: 4px 0; background: linear-gradient(to right, @GRADIENT@); }
  .legend .bounds { display: flex; justify-content: space-between; }
  .leaflet-tooltip { font-size: 14px; font-weight: bold; }
</style>
</head>
<body>
<div id="map"></div>
<div class="legend">
  <div>@CAPTION@</div>
  <div class="bar"></div>
  <div class="bounds"><span>@MIN@</span><span>@MAX@</span></div>
</div>
<script>
  var zones = @ZONES@;
  var map = L.map("map", { zoomSnap: 0.5 }).setView([@LAT@, @LON@], @ZOOM@);
  L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
    attribution: "&copy; OpenStreetMap contributors"
  }).addTo(map);
  L.geoJSON(zones, {
    style: function (feature) {
      return {
        color: "@OUTLINE@",
        weight: @WEIGHT@,
        fillColor: feature.properties.fill,
        fillOpacity: @OPACITY@
      };
    },
    onEachFeature: function (feature, layer) {
      layer.bindTooltip(feature.properties.tooltip, { sticky: true });
    }
  }).addTo(map);
</script>
</body>
</html>
"#;
