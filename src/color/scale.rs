use anyhow::anyhow;

use super::color::Color;

/// Color returned for values that cannot be placed on the scale (NaN).
pub const NA_COLOR: Color = Color {
    r: 204.0,
    g: 204.0,
    b: 204.0,
    a: 1.0,
};

/// Continuous color scale over evenly spaced color stops, mapped linearly onto the domain
/// `[min, max]`. Values outside of the domain are clamped to the first or last stop.
///
/// ```
/// use choropleth_style::color::{color::Color, scale::ColorScale};
///
/// let stops = vec![Color::parse("#fee").unwrap(), Color::parse("#900").unwrap()];
/// let scale = ColorScale::new(stops, 0.0, 10.0).unwrap();
/// assert_eq!(scale.at(5.0).hex(), "#cc7777");
/// ```
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<Color>,
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(stops: Vec<Color>, min: f64, max: f64) -> anyhow::Result<Self> {
        if stops.is_empty() {
            return Err(anyhow!("A color scale needs at least one color stop"));
        }
        Ok(Self { stops, min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// The color stop at `index`. Indices past the end give the last stop.
    pub fn stop(&self, index: usize) -> Color {
        let last = self.stops.len() - 1;
        self.stops[index.min(last)]
    }

    /// Evaluate the scale at `value`.
    pub fn at(&self, value: f64) -> Color {
        if value.is_nan() {
            return NA_COLOR;
        }
        // A collapsed domain maps everything onto the top of the scale.
        let t = if self.max != self.min {
            (value - self.min) / (self.max - self.min)
        } else {
            1.0
        };
        self.at_normalized(t.clamp(0.0, 1.0))
    }

    fn at_normalized(&self, t: f64) -> Color {
        let last = self.stops.len() - 1;
        if last == 0 || t <= 0.0 {
            return self.stops[0];
        }
        if t >= 1.0 {
            return self.stops[last];
        }
        let position = t * last as f64;
        let lower = position.floor() as usize;
        let fraction = position - lower as f64;
        self.stops[lower].mix(&self.stops[lower + 1], fraction)
    }
}
