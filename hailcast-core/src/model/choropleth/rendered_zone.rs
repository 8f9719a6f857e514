use crate::model::zone::ZoneRecord;

/// a zone left-joined with its prediction. zones with no matching prediction
/// keep a None demand and render with the placeholder style.
#[derive(Clone, Debug)]
pub struct RenderedZone {
    pub zone: ZoneRecord,
    pub demand: Option<f64>,
}
