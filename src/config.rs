use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Empirical tuning for the rounded-divider pass. The offsets are visual
/// fudge factors inherited from the reference rendering, kept configurable
/// instead of re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DividerConfig {
    /// Flat part of the angular correction applied to the colored overlay
    /// strokes, in degrees.
    pub angle_offset: f32,
    /// Extra strokes drawn per boundary on top of one per divider degree.
    pub extra_passes: u32,
    /// Span of each narrow overlay stroke, in degrees.
    pub stroke_span: f32,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            angle_offset: 6.0,
            extra_passes: 2,
            stroke_span: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    pub stroke_width: f32,
    /// Cleanup circles are skipped once the ring is this wide.
    pub max_ring_width: f32,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            stroke_width: 3.0,
            max_ring_width: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterTextConfig {
    /// Baseline shift applied to a lone value, as a fraction of its font
    /// size, so the text sits optically centered.
    pub value_shift: f32,
    /// Vertical gap between the value baseline and the label baseline.
    pub label_gap: f32,
}

impl Default for CenterTextConfig {
    fn default() -> Self {
        Self {
            value_shift: 0.35,
            label_gap: 8.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub min_radius: f32,
    /// Visible spans below this many degrees are suppressed entirely.
    pub min_visible_span: f32,
    pub divider: DividerConfig,
    pub cleanup: CleanupConfig,
    pub center_text: CenterTextConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_radius: 10.0,
            min_visible_span: 0.1,
            divider: DividerConfig::default(),
            cleanup: CleanupConfig::default(),
            center_text: CenterTextConfig::default(),
        }
    }
}

/// Fallback raster size used when the SVG carries no usable dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub chart: ChartConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::light();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            chart: ChartConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    chart: Option<ChartOverrides>,
    render: Option<RenderOverrides>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    center_value_size: Option<f32>,
    center_label_size: Option<f32>,
    center_value_color: Option<String>,
    center_label_color: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartOverrides {
    min_radius: Option<f32>,
    min_visible_span: Option<f32>,
    divider_angle_offset: Option<f32>,
    divider_extra_passes: Option<u32>,
    divider_stroke_span: Option<f32>,
    cleanup_stroke_width: Option<f32>,
    cleanup_max_ring_width: Option<f32>,
    center_value_shift: Option<f32>,
    center_label_gap: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct RenderOverrides {
    width: Option<f32>,
    height: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;
    apply_config_file(&mut config, parsed);
    Ok(config)
}

fn apply_config_file(config: &mut Config, parsed: ConfigFile) {
    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "light" || theme_name == "default" {
            config.theme = Theme::light();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.center_value_size {
            config.theme.center_value_size = v;
        }
        if let Some(v) = vars.center_label_size {
            config.theme.center_label_size = v;
        }
        if let Some(v) = vars.center_value_color {
            config.theme.center_value_color = v;
        }
        if let Some(v) = vars.center_label_color {
            config.theme.center_label_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(chart) = parsed.chart {
        if let Some(v) = chart.min_radius {
            config.chart.min_radius = v;
        }
        if let Some(v) = chart.min_visible_span {
            config.chart.min_visible_span = v;
        }
        if let Some(v) = chart.divider_angle_offset {
            config.chart.divider.angle_offset = v;
        }
        if let Some(v) = chart.divider_extra_passes {
            config.chart.divider.extra_passes = v;
        }
        if let Some(v) = chart.divider_stroke_span {
            config.chart.divider.stroke_span = v;
        }
        if let Some(v) = chart.cleanup_stroke_width {
            config.chart.cleanup.stroke_width = v;
        }
        if let Some(v) = chart.cleanup_max_ring_width {
            config.chart.cleanup.max_ring_width = v;
        }
        if let Some(v) = chart.center_value_shift {
            config.chart.center_text.value_shift = v;
        }
        if let Some(v) = chart.center_label_gap {
            config.chart.center_text.label_gap = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
    }

    config.render.background = config.theme.background.clone();
}
