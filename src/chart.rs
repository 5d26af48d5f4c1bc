use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());
static FUNC_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:rgb|rgba|hsl|hsla)\([^()]*\)$").unwrap());
static NAMED_COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read chart input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse chart input: {0}")]
    Parse(#[from] json5::Error),
}

/// Cap style for section arc strokes. `Round` also enables the divider
/// rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
}

/// One weighted chart section. Percentages are independent and are not
/// required to sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(default = "missing_percentage")]
    pub percentage: f32,
    #[serde(default)]
    pub color: String,
}

fn missing_percentage() -> f32 {
    f32::NAN
}

impl Section {
    pub fn new(percentage: f32, color: impl Into<String>) -> Self {
        Self {
            percentage,
            color: color.into(),
        }
    }

    /// A section survives filtering when its percentage is a finite positive
    /// number and its color is a recognizable CSS color.
    pub fn is_valid(&self) -> bool {
        self.percentage.is_finite() && self.percentage > 0.0 && is_css_color(&self.color)
    }
}

pub fn is_css_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    HEX_COLOR_RE.is_match(value)
        || FUNC_COLOR_RE.is_match(value)
        || NAMED_COLOR_RE.is_match(value)
}

/// Chart description as supplied by the caller. Field names on the wire are
/// camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Outer radius, floored at the configured minimum during layout.
    pub radius: f32,
    #[serde(default)]
    pub inner_radius: f32,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub stroke_cap: StrokeCap,
    /// Gap between adjacent sections, in degrees.
    #[serde(default)]
    pub divider_size: f32,
    #[serde(default)]
    pub show_center_text: bool,
    #[serde(default)]
    pub center_value: Option<String>,
    #[serde(default)]
    pub center_label: Option<String>,
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

impl ChartSpec {
    pub fn new(radius: f32) -> Self {
        Self {
            sections: Vec::new(),
            radius,
            inner_radius: 0.0,
            background_color: default_background(),
            stroke_cap: StrokeCap::default(),
            divider_size: 0.0,
            show_center_text: false,
            center_value: None,
            center_label: None,
        }
    }

    pub fn from_json5(input: &str) -> Result<Self, ChartError> {
        Ok(json5::from_str(input)?)
    }

    /// Sections that survive input filtering, in their original order.
    /// Dropped entries are reported on the log, not surfaced as errors.
    pub fn valid_sections(&self) -> Vec<Section> {
        let mut kept = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            if section.is_valid() {
                kept.push(section.clone());
            } else {
                log::debug!(
                    "dropping invalid section (percentage={}, color={:?})",
                    section.percentage,
                    section.color
                );
            }
        }
        kept
    }
}

pub fn load_chart(path: &Path) -> Result<ChartSpec, ChartError> {
    let contents = std::fs::read_to_string(path)?;
    ChartSpec::from_json5(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_json5() {
        let spec = ChartSpec::from_json5(
            r##"{
                sections: [{ percentage: 45, color: "#ff3b30" }],
                radius: 120,
                innerRadius: 80,
                strokeCap: "round",
                dividerSize: 3,
                showCenterText: true,
                centerValue: "45%",
            }"##,
        )
        .unwrap();
        assert_eq!(spec.sections.len(), 1);
        assert_eq!(spec.radius, 120.0);
        assert_eq!(spec.inner_radius, 80.0);
        assert_eq!(spec.stroke_cap, StrokeCap::Round);
        assert_eq!(spec.divider_size, 3.0);
        assert!(spec.show_center_text);
        assert_eq!(spec.center_value.as_deref(), Some("45%"));
    }

    #[test]
    fn stroke_cap_defaults_to_butt() {
        let spec = ChartSpec::from_json5("{ radius: 50 }").unwrap();
        assert_eq!(spec.stroke_cap, StrokeCap::Butt);
        assert!(spec.sections.is_empty());
    }

    #[test]
    fn missing_radius_is_an_error() {
        assert!(ChartSpec::from_json5("{ sections: [] }").is_err());
    }

    #[test]
    fn invalid_sections_are_dropped() {
        let spec = ChartSpec::from_json5(
            r##"{
                radius: 100,
                sections: [
                    { percentage: NaN, color: "red" },
                    { percentage: 0, color: "red" },
                    { percentage: -5, color: "red" },
                    { percentage: 20 },
                    { percentage: 20, color: "12 34" },
                    { percentage: 30, color: "#34C759" },
                ],
            }"##,
        )
        .unwrap();
        let kept = spec.valid_sections();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].color, "#34C759");
    }

    #[test]
    fn recognizes_common_color_forms() {
        for color in [
            "#fff",
            "#FF3B30",
            "#ff3b30cc",
            "rgb(255, 59, 48)",
            "rgba(0, 0, 0, 0.5)",
            "hsl(120, 50%, 50%)",
            "tomato",
        ] {
            assert!(is_css_color(color), "{color}");
        }
        for color in ["", "  ", "#ggg", "12px", "not a color!!", "rgb("] {
            assert!(!is_css_color(color), "{color:?}");
        }
    }
}
