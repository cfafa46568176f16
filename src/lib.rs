extern crate log;
pub mod color;
pub mod config;
pub mod geofile;
pub mod style;
