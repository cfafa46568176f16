use crate::color::scale::ColorScale;

use super::hideout::{ClassMode, Hideout, Style};

/// What happened while resolving the style of one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The value exceeded `matched_classes` thresholds and the fill color was set.
    Styled { matched_classes: usize },
    /// The value did not exceed any threshold, the base style is returned as is.
    NoThresholdExceeded,
    /// The feature has no (or a null) value for the color property.
    MissingProperty,
    /// The color property holds something other than a number.
    NonNumericProperty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub style: Style,
    pub outcome: Outcome,
}

/// Resolves feature styles against one hideout. The color scale is built once and reused for every
/// feature.
#[derive(Debug, Clone)]
pub struct StyleResolver<'a> {
    hideout: &'a Hideout,
    scale: ColorScale,
}

impl<'a> StyleResolver<'a> {
    pub fn new(hideout: &'a Hideout) -> anyhow::Result<Self> {
        Ok(Self {
            hideout,
            scale: hideout.color_scale()?,
        })
    }

    pub fn hideout(&self) -> &Hideout {
        self.hideout
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Style for `feature`, starting from the base style of the hideout.
    ///
    /// Every class threshold that is strictly less than the feature's value counts as a match. As
    /// soon as one class matches, the fill color is set: in continuous mode to the color scale
    /// evaluated at the value itself, in discrete mode to the color stop of the last matched
    /// class. Without a match the base style is returned unchanged.
    pub fn resolve_detailed(&self, feature: &geojson::Feature) -> Resolution {
        let mut style = self.hideout.style.clone();
        let value = match property_value(feature, &self.hideout.color_prop) {
            Ok(value) => value,
            Err(outcome) => return Resolution { style, outcome },
        };

        let matched: Vec<usize> = self
            .hideout
            .classes
            .iter()
            .enumerate()
            .filter(|(_, threshold)| value > **threshold)
            .map(|(index, _)| index)
            .collect();
        let last_match = match matched.last() {
            Some(index) => *index,
            None => {
                return Resolution {
                    style,
                    outcome: Outcome::NoThresholdExceeded,
                }
            }
        };

        style.fill_color = Some(match self.hideout.class_mode {
            ClassMode::Continuous => self.scale.at(value),
            ClassMode::Discrete => self.scale.stop(last_match),
        });
        Resolution {
            style,
            outcome: Outcome::Styled {
                matched_classes: matched.len(),
            },
        }
    }

    pub fn resolve(&self, feature: &geojson::Feature) -> Style {
        self.resolve_detailed(feature).style
    }
}

/// Style for a single feature. Builds the color scale on every call, prefer a `StyleResolver` when
/// styling many features with the same hideout.
///
/// A hideout without color stops cannot color anything, the base style is returned in that case.
pub fn resolve(feature: &geojson::Feature, hideout: &Hideout) -> Style {
    match StyleResolver::new(hideout) {
        Ok(resolver) => resolver.resolve(feature),
        Err(err) => {
            log::warn!("Leaving style unchanged: {}", err);
            hideout.style.clone()
        }
    }
}

fn property_value(feature: &geojson::Feature, key: &str) -> Result<f64, Outcome> {
    match feature.properties.as_ref().and_then(|props| props.get(key)) {
        None | Some(serde_json::Value::Null) => Err(Outcome::MissingProperty),
        Some(value) => value.as_f64().ok_or(Outcome::NonNumericProperty),
    }
}
