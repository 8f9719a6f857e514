use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// stable integer identifier for a pickup zone. matches the id column of the
/// zone dataset's attribute table and the zone id feature fed to the model.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct ZoneId(pub i64);

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
