pub mod choropleth;
pub mod demand;
pub mod feature;
pub mod zone;
