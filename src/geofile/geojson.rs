use std::{fs, path::Path};

use anyhow::{anyhow, Context};

use crate::style::hideout::Style;

pub fn read_feature_collection(input_filepath: &Path) -> anyhow::Result<geojson::FeatureCollection> {
    let contents = fs::read_to_string(input_filepath)
        .with_context(|| format!("Reading GeoJSON from {:?}", input_filepath))?;
    match contents.parse::<geojson::GeoJson>()? {
        geojson::GeoJson::FeatureCollection(collection) => Ok(collection),
        other => Err(anyhow!(
            "Expected a FeatureCollection in {:?}, found a {}",
            input_filepath,
            geojson_kind(&other)
        )),
    }
}

pub fn write_feature_collection(
    feature_collection: geojson::FeatureCollection,
    output_filepath: &Path,
) -> anyhow::Result<()> {
    let geojson_contents = geojson::GeoJson::from(feature_collection);
    fs::write(output_filepath, geojson_contents.to_string())
        .with_context(|| format!("Writing GeoJSON to {:?}", output_filepath))
}

/// Store `style` as an object under `property_name` in the feature's properties.
pub fn attach_style(
    feature: &mut geojson::Feature,
    style: &Style,
    property_name: &str,
) -> anyhow::Result<()> {
    let style_value = serde_json::to_value(style)?;
    feature
        .properties
        .get_or_insert_with(geojson::JsonObject::new)
        .insert(property_name.to_string(), style_value);
    Ok(())
}

fn geojson_kind(geojson: &geojson::GeoJson) -> &'static str {
    match geojson {
        geojson::GeoJson::Geometry(_) => "Geometry",
        geojson::GeoJson::Feature(_) => "Feature",
        geojson::GeoJson::FeatureCollection(_) => "FeatureCollection",
    }
}
