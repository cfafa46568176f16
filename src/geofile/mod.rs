pub mod filter;
pub mod geojson;
