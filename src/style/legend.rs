use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::color::{color::Color, scale::ColorScale};

use super::hideout::Hideout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorbarTick {
    pub value: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendCategory {
    pub label: String,
    pub color: Color,
}

/// Legend for a styled layer: a continuous colorbar plus one category per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub color_prop: String,
    pub colorbar: Vec<ColorbarTick>,
    pub categories: Vec<LegendCategory>,
}

/// `n_ticks` values spread evenly from the scale's min to its max, both included.
pub fn colorbar_ticks(scale: &ColorScale, n_ticks: usize) -> Vec<ColorbarTick> {
    let step = if n_ticks > 1 {
        (scale.max() - scale.min()) / (n_ticks - 1) as f64
    } else {
        0.0
    };
    (0..n_ticks)
        .map(|index| {
            let value = scale.min() + step * index as f64;
            ColorbarTick {
                value,
                color: scale.at(value),
            }
        })
        .collect()
}

/// One "{class}+" entry per class threshold, colored with the class's color stop.
pub fn categorical_legend(classes: &[f64], scale: &ColorScale) -> Vec<LegendCategory> {
    classes
        .iter()
        .enumerate()
        .map(|(index, class)| LegendCategory {
            label: format!("{}+", class),
            color: scale.stop(index),
        })
        .collect()
}

pub fn build_legend(hideout: &Hideout, n_ticks: usize) -> anyhow::Result<Legend> {
    let scale = hideout.color_scale()?;
    Ok(Legend {
        color_prop: hideout.color_prop.clone(),
        colorbar: colorbar_ticks(&scale, n_ticks),
        categories: categorical_legend(&hideout.classes, &scale),
    })
}

pub fn write_legend(legend: &Legend, output_filepath: &Path) -> anyhow::Result<()> {
    let contents = serde_yaml::to_string(legend)?;
    fs::write(output_filepath, contents)
        .with_context(|| format!("Writing legend to {:?}", output_filepath))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use testdir::testdir;

    use crate::{
        color::{color::Color, scale::ColorScale},
        style::hideout::{ClassMode, Hideout, Style},
    };

    use super::{build_legend, categorical_legend, colorbar_ticks, write_legend, Legend};

    fn scale(min: f64, max: f64) -> ColorScale {
        ColorScale::new(
            vec![Color::parse("white").unwrap(), Color::parse("black").unwrap()],
            min,
            max,
        )
        .unwrap()
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![20.0])]
    #[case(2, vec![20.0, 55.0])]
    #[case(8, vec![20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0])]
    fn test_colorbar_tick_values(#[case] n_ticks: usize, #[case] expected: Vec<f64>) {
        let ticks = colorbar_ticks(&scale(20.0, 55.0), n_ticks);
        assert_eq!(ticks.len(), expected.len());
        for (tick, expected_value) in ticks.iter().zip(expected) {
            assert_abs_diff_eq!(tick.value, expected_value, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_colorbar_tick_colors() {
        let ticks = colorbar_ticks(&scale(0.0, 10.0), 3);
        let colors: Vec<String> = ticks.iter().map(|tick| tick.color.hex()).collect();
        assert_eq!(colors, vec!["#ffffff", "#808080", "#000000"]);
    }

    #[test]
    fn test_categorical_labels_and_colors() {
        let categories = categorical_legend(&[0.0, 2.5, 10.0], &scale(0.0, 10.0));
        let labels: Vec<&str> = categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["0+", "2.5+", "10+"]);
        // Classes beyond the number of stops reuse the last stop.
        assert_eq!(categories[0].color.hex(), "#ffffff");
        assert_eq!(categories[1].color.hex(), "#000000");
        assert_eq!(categories[2].color.hex(), "#000000");
    }

    #[test]
    fn test_write_legend() {
        let hideout = Hideout {
            min: 0.0,
            max: 1000.0,
            classes: vec![0.0, 10.0],
            colorscale: vec![Color::parse("#FFEDA0").unwrap(), Color::parse("#800026").unwrap()],
            style: Style::default(),
            color_prop: "density".to_string(),
            class_mode: ClassMode::Continuous,
        };
        let legend = build_legend(&hideout, 5).unwrap();
        assert_eq!(legend.colorbar.len(), 5);
        assert_eq!(legend.categories.len(), 2);

        let test_dir = testdir!();
        let legend_filepath = test_dir.join("legend.yaml");
        write_legend(&legend, &legend_filepath).unwrap();

        let contents = std::fs::read_to_string(&legend_filepath).unwrap();
        let read_back: Legend = serde_yaml::from_str(&contents).unwrap();
        assert_eq!(read_back.color_prop, "density");
        assert_eq!(read_back.categories, legend.categories);
    }
}
