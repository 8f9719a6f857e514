use crate::model::zone::ZoneId;
use serde::{Deserialize, Serialize};

/// predicted pickup demand for one zone, one-to-one with the feature row
/// that produced it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub zone_id: ZoneId,
    pub demand: f64,
}
