use crate::chart::{ChartSpec, Section, StrokeCap};
use crate::config::ChartConfig;
use crate::geometry::percent_to_arc_angle;
use crate::theme::Theme;

/// Normalized chart geometry, computed once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub radius: f32,
    pub inner_radius: f32,
    /// Ring thickness, `radius - inner_radius`.
    pub width: f32,
    pub divider_size: f32,
}

impl Dimensions {
    pub fn from_spec(spec: &ChartSpec, config: &ChartConfig) -> Self {
        let radius = if spec.radius.is_finite() {
            spec.radius.max(config.min_radius)
        } else {
            config.min_radius
        };
        let mut inner_radius = if spec.inner_radius.is_finite() {
            spec.inner_radius.max(0.0)
        } else {
            0.0
        };
        if inner_radius >= radius {
            inner_radius = radius - 1.0;
        }
        let divider_size = if spec.divider_size.is_finite() {
            spec.divider_size.max(0.0)
        } else {
            0.0
        };
        Self {
            radius,
            inner_radius,
            width: radius - inner_radius,
            divider_size,
        }
    }

    /// Mid-line radius the ring strokes are drawn at.
    pub fn stroke_radius(&self) -> f32 {
        self.radius - self.width / 2.0
    }
}

/// Pre-shrink geometry of one laid-out section. The allocator produces the
/// full list, the divider pass consumes it; nothing survives the render.
#[derive(Debug, Clone)]
pub struct SectionArc {
    pub percentage: f32,
    pub color: String,
    pub start_angle: f32,
    pub arc_angle: f32,
}

/// One stroked ring arc, ready for path serialization.
#[derive(Debug, Clone)]
pub struct RingArc {
    pub color: String,
    pub radius: f32,
    pub start_angle: f32,
    pub arc_angle: f32,
    pub stroke_width: f32,
    pub round_cap: bool,
}

#[derive(Debug, Clone)]
pub struct CenterText {
    pub value: Option<String>,
    pub label: Option<String>,
    pub x: f32,
    pub value_y: f32,
    pub label_y: f32,
}

/// Complete drawing description for one render. Draw order is part of the
/// contract: background, sections, dividers, cleanup, center text.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub dimensions: Dimensions,
    pub width: f32,
    pub height: f32,
    pub center: (f32, f32),
    pub background: RingArc,
    pub sections: Vec<RingArc>,
    pub painted: Vec<SectionArc>,
    pub dividers: Vec<RingArc>,
    pub cleanup: Vec<RingArc>,
    pub center_text: Option<CenterText>,
}

pub fn compute_layout(spec: &ChartSpec, theme: &Theme, config: &ChartConfig) -> ChartLayout {
    let dimensions = Dimensions::from_spec(spec, config);
    let center = (dimensions.radius, dimensions.radius);
    let sections = spec.valid_sections();
    let dividers_active = spec.stroke_cap == StrokeCap::Round
        && dimensions.divider_size > 0.0
        && sections.len() > 1;

    let background = RingArc {
        color: spec.background_color.clone(),
        radius: dimensions.stroke_radius(),
        start_angle: 0.0,
        arc_angle: 360.0,
        stroke_width: dimensions.width,
        round_cap: false,
    };

    let (section_arcs, painted) =
        allocate_sections(&sections, &dimensions, spec.stroke_cap, dividers_active, config);
    let dividers = if dividers_active {
        divider_arcs(&painted, &dimensions, &spec.background_color, config)
    } else {
        Vec::new()
    };
    let cleanup = if dividers_active {
        cleanup_circles(&dimensions, &spec.background_color, config)
    } else {
        Vec::new()
    };
    let center_text = center_text_layout(spec, theme, config, center);

    ChartLayout {
        dimensions,
        width: dimensions.radius * 2.0,
        height: dimensions.radius * 2.0,
        center,
        background,
        sections: section_arcs,
        painted,
        dividers,
        cleanup,
        center_text,
    }
}

/// Walks the filtered sections in order, accumulating a running start angle.
/// Painted spans are clamped so their sum never exceeds a full circle. When
/// dividers are active, each visible arc is shrunk by the divider size and
/// shifted forward by it, and the pre-shrink geometry is recorded for the
/// divider pass.
fn allocate_sections(
    sections: &[Section],
    dimensions: &Dimensions,
    stroke_cap: StrokeCap,
    dividers_active: bool,
    config: &ChartConfig,
) -> (Vec<RingArc>, Vec<SectionArc>) {
    let mut arcs = Vec::new();
    let mut painted = Vec::new();
    let mut start_angle = 0.0_f32;

    for section in sections {
        let remaining = (360.0 - start_angle).max(0.0);
        let arc_angle = percent_to_arc_angle(section.percentage).min(remaining);

        let mut visible_start = start_angle;
        let mut visible_span = arc_angle;
        if dividers_active {
            visible_start += dimensions.divider_size;
            visible_span -= dimensions.divider_size;
        }

        if visible_span >= config.min_visible_span {
            arcs.push(RingArc {
                color: section.color.clone(),
                radius: dimensions.stroke_radius(),
                start_angle: visible_start,
                arc_angle: visible_span,
                stroke_width: dimensions.width,
                round_cap: stroke_cap == StrokeCap::Round,
            });
        }

        if dividers_active {
            painted.push(SectionArc {
                percentage: section.percentage,
                color: section.color.clone(),
                start_angle,
                arc_angle,
            });
        }

        start_angle += arc_angle;
    }

    (arcs, painted)
}

/// Builds the rounded-cap illusion at every section boundary from pairs of
/// narrow round-capped strokes: one in the background color erasing the
/// trailing edge, one in the section color redrawing it. Offsets and the
/// repetition count are the tuned constants from `DividerConfig`, not
/// derived geometry.
fn divider_arcs(
    painted: &[SectionArc],
    dimensions: &Dimensions,
    background_color: &str,
    config: &ChartConfig,
) -> Vec<RingArc> {
    let tuning = &config.divider;
    let correction = dimensions.divider_size * 2.0 + tuning.angle_offset;
    let passes = dimensions.divider_size.round().max(0.0) as u32 + tuning.extra_passes;
    let radius = dimensions.stroke_radius();
    let mut arcs = Vec::new();

    for section in painted {
        let end = section.start_angle + section.arc_angle;
        for pass in 0..passes {
            let step = pass as f32;
            arcs.push(RingArc {
                color: background_color.to_string(),
                radius,
                start_angle: end - tuning.stroke_span - step,
                arc_angle: tuning.stroke_span,
                stroke_width: dimensions.width,
                round_cap: true,
            });
            arcs.push(RingArc {
                color: section.color.clone(),
                radius,
                start_angle: end - correction + step,
                arc_angle: tuning.stroke_span,
                stroke_width: dimensions.width,
                round_cap: true,
            });
        }
    }

    arcs
}

/// Full-circle background strokes hugging the ring edges, masking overshoot
/// from the divider approximation. Skipped for very wide rings.
fn cleanup_circles(
    dimensions: &Dimensions,
    background_color: &str,
    config: &ChartConfig,
) -> Vec<RingArc> {
    let cleanup = &config.cleanup;
    if dimensions.width >= cleanup.max_ring_width {
        return Vec::new();
    }

    let stroke = cleanup.stroke_width;
    let circle = |radius: f32| RingArc {
        color: background_color.to_string(),
        radius,
        start_angle: 0.0,
        arc_angle: 360.0,
        stroke_width: stroke,
        round_cap: false,
    };

    let mut arcs = vec![circle(dimensions.radius + stroke / 2.0)];
    if dimensions.inner_radius > stroke {
        arcs.push(circle(dimensions.inner_radius - stroke / 2.0));
    }
    arcs
}

fn center_text_layout(
    spec: &ChartSpec,
    theme: &Theme,
    config: &ChartConfig,
    center: (f32, f32),
) -> Option<CenterText> {
    if !spec.show_center_text {
        return None;
    }
    let value = spec.center_value.clone().filter(|text| !text.is_empty());
    let label = spec.center_label.clone().filter(|text| !text.is_empty());
    if value.is_none() && label.is_none() {
        return None;
    }

    let text_cfg = &config.center_text;
    let value_y = if label.is_some() {
        center.1
    } else {
        center.1 + theme.center_value_size * text_cfg.value_shift
    };
    let label_y = if value.is_some() {
        value_y + theme.center_label_size + text_cfg.label_gap
    } else {
        center.1 + theme.center_label_size * text_cfg.value_shift
    };

    Some(CenterText {
        value,
        label,
        x: center.0,
        value_y,
        label_y,
    })
}
