mod dataset;
mod error;
mod id;
mod record;
mod source_format;

pub use dataset::ZoneDataset;
pub use error::ZoneError;
pub use id::ZoneId;
pub use record::ZoneRecord;
pub use source_format::ZoneSourceFormat;
