use serde::{Deserialize, Serialize};

use crate::color::{color::Color, scale::ColorScale};

/// Rendering attributes of a map feature, e.g. `weight`, `opacity`, `color`, `dashArray`,
/// `fillOpacity`. Only `fillColor` is typed, every other attribute is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// How a feature that exceeds one or more class thresholds gets its fill color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassMode {
    /// Color scale evaluated at the feature's own value, no matter which classes matched.
    #[default]
    Continuous,
    /// The color stop of the last matched class, `colorscale[i]`.
    Discrete,
}

/// Styling context shared by all features of a layer. The field names serialize exactly as
/// `min`, `max`, `classes`, `colorscale`, `style` and `colorProp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hideout {
    pub min: f64,
    pub max: f64,
    /// Class thresholds, expected in ascending order.
    pub classes: Vec<f64>,
    pub colorscale: Vec<Color>,
    #[serde(default)]
    pub style: Style,
    /// Name of the feature property that drives the color.
    pub color_prop: String,
    #[serde(default)]
    pub class_mode: ClassMode,
}

impl Hideout {
    pub fn color_scale(&self) -> anyhow::Result<ColorScale> {
        ColorScale::new(self.colorscale.clone(), self.min, self.max)
    }
}
