extern crate log;
use std::collections::HashMap;
use std::path::PathBuf;

use choropleth_style::config::load_config;
use choropleth_style::geofile::filter::filter_features;
use choropleth_style::geofile::geojson::{
    attach_style, read_feature_collection, write_feature_collection,
};
use choropleth_style::style::legend::{build_legend, write_legend};
use choropleth_style::style::resolver::{Outcome, Resolution, StyleResolver};
use clap::Parser;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

/// Color the features of a GeoJSON file for a choropleth map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input config file.
    #[arg(short, long)]
    config_filepath: PathBuf,

    /// Feature property that drives the color, overrides `hideout.colorProp` from the config.
    #[arg(long)]
    color_prop: Option<String>,
}

fn try_main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();

    let args = Args::try_parse()?;
    let mut config = load_config(&args.config_filepath)?;
    if let Some(color_prop) = args.color_prop {
        log::info!(
            "Coloring by '{}' instead of '{}'",
            color_prop,
            config.hideout.color_prop
        );
        config.hideout.color_prop = color_prop;
    }

    log::info!("Reading features from {:?}", &config.input_geojson_path);
    let mut feature_collection = read_feature_collection(&config.input_geojson_path)?;
    log::info!("Read {} features", feature_collection.features.len());

    feature_collection.features = filter_features(feature_collection.features, &config.filter);

    let resolver = StyleResolver::new(&config.hideout)?;
    log::info!(
        "Resolving styles by '{}' over [{}, {}] with {} classes",
        config.hideout.color_prop,
        config.hideout.min,
        config.hideout.max,
        config.hideout.classes.len()
    );
    let bar = ProgressBar::new(feature_collection.features.len() as u64);
    let resolutions: Vec<Resolution> = feature_collection
        .features
        .par_iter()
        .progress_with(bar)
        .map(|feature| resolver.resolve_detailed(feature))
        .collect();

    let mut outcome_counts: HashMap<Outcome, usize> = HashMap::new();
    for (feature, resolution) in feature_collection.features.iter_mut().zip(resolutions) {
        *outcome_counts.entry(resolution.outcome).or_insert(0) += 1;
        attach_style(feature, &resolution.style, &config.style_property)?;
    }
    let num_styled: usize = outcome_counts
        .iter()
        .filter(|(outcome, _)| matches!(outcome, Outcome::Styled { .. }))
        .map(|(_, count)| count)
        .sum();
    log::info!(
        "Colored {} out of {} features",
        num_styled,
        feature_collection.features.len()
    );
    log::debug!("Resolution outcomes: {:?}", outcome_counts);
    if let Some(count) = outcome_counts.get(&Outcome::NonNumericProperty) {
        log::warn!(
            "{} features have a non-numeric '{}' property",
            count,
            config.hideout.color_prop
        );
    }

    log::info!(
        "Writing styled features to {:?}",
        &config.output_geojson_path
    );
    write_feature_collection(feature_collection, &config.output_geojson_path)?;

    if let Some(legend_path) = &config.legend_path {
        log::info!("Writing legend to {:?}", legend_path);
        let legend = build_legend(&config.hideout, config.colorbar_ticks)?;
        write_legend(&legend, legend_path)?;
    }
    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
