use std::{fs::read_to_string, path::Path, path::PathBuf};

use anyhow::anyhow;
use serde::Deserialize;

use crate::{geofile::filter::FeatureFilter, style::hideout::Hideout};

fn default_style_property() -> String {
    "style".to_string()
}

fn default_colorbar_ticks() -> usize {
    5
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub input_geojson_path: PathBuf,
    pub output_geojson_path: PathBuf,
    /// Feature property that receives the resolved style.
    #[serde(default = "default_style_property")]
    pub style_property: String,
    pub legend_path: Option<PathBuf>,
    #[serde(default = "default_colorbar_ticks")]
    pub colorbar_ticks: usize,
    #[serde(default)]
    pub filter: FeatureFilter,
    pub hideout: Hideout,
}

impl Config {
    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        if config.hideout.colorscale.is_empty() {
            return Err(anyhow!("hideout.colorscale needs at least one color"));
        }
        if config.hideout.min > config.hideout.max {
            log::warn!(
                "hideout.min ({}) is larger than hideout.max ({}), the color scale is reversed",
                config.hideout.min,
                config.hideout.max
            );
        }
        Ok(config)
    }
}

pub fn load_config(config_filepath: &Path) -> anyhow::Result<Config> {
    if !config_filepath.exists() {
        return Err(anyhow!("Config file {:?} not found", config_filepath));
    }
    let config_contents = read_to_string(config_filepath)?;
    Config::from_yaml(&config_contents)
}
