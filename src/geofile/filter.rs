use serde::{Deserialize, Serialize};

/// Keeps features whose numeric `property` is strictly greater than `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdFilter {
    pub property: String,
    pub value: f64,
}

/// Keeps features whose string `property` equals `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualsFilter {
    pub property: String,
    pub value: String,
}

/// Conjunction of property filters. The default filter lets every feature through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureFilter {
    #[serde(default)]
    pub greater_than: Vec<ThresholdFilter>,
    #[serde(default)]
    pub equals: Vec<EqualsFilter>,
}

impl FeatureFilter {
    pub fn is_empty(&self) -> bool {
        self.greater_than.is_empty() && self.equals.is_empty()
    }

    pub fn matches(&self, feature: &geojson::Feature) -> bool {
        let property = |key: &str| feature.properties.as_ref().and_then(|props| props.get(key));
        self.greater_than.iter().all(|filter| {
            property(&filter.property)
                .and_then(|value| value.as_f64())
                .map_or(false, |value| value > filter.value)
        }) && self.equals.iter().all(|filter| {
            property(&filter.property).and_then(|value| value.as_str())
                == Some(filter.value.as_str())
        })
    }
}

/// Features that pass `filter`, in their original order.
pub fn filter_features(
    features: Vec<geojson::Feature>,
    filter: &FeatureFilter,
) -> Vec<geojson::Feature> {
    if filter.is_empty() {
        return features;
    }
    let num_features = features.len();
    let kept: Vec<geojson::Feature> = features
        .into_iter()
        .filter(|feature| filter.matches(feature))
        .collect();
    log::info!("Kept {} out of {} features", kept.len(), num_features);
    kept
}
