mod color_ramp;
mod color_scale;
mod map;
mod rendered_zone;

pub use color_ramp::{ColorRamp, YL_OR_RD_9};
pub use color_scale::ColorScale;
pub use map::{ChoroplethMap, MAP_CENTER, MAP_ZOOM};
pub use rendered_zone::RenderedZone;
