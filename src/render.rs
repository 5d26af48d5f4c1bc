use crate::geometry::describe_arc;
use crate::layout::{ChartLayout, RingArc};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

#[cfg(feature = "png")]
use crate::config::RenderConfig;

/// Serializes a chart layout to an SVG document. Draw order is fixed:
/// background ring, section arcs, divider overlays, cleanup circles, center
/// text. Later primitives occlude earlier ones.
pub fn render_svg(layout: &ChartLayout, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    push_arc(&mut svg, layout.center, &layout.background);
    for arc in &layout.sections {
        push_arc(&mut svg, layout.center, arc);
    }
    for arc in &layout.dividers {
        push_arc(&mut svg, layout.center, arc);
    }
    for arc in &layout.cleanup {
        push_arc(&mut svg, layout.center, arc);
    }

    if let Some(text) = &layout.center_text {
        if let Some(value) = &text.value {
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                text.x,
                text.value_y,
                theme.font_family,
                theme.center_value_size,
                theme.center_value_color,
                escape_xml(value)
            ));
        }
        if let Some(label) = &text.label {
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                text.x,
                text.label_y,
                theme.font_family,
                theme.center_label_size,
                theme.center_label_color,
                escape_xml(label)
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

fn push_arc(svg: &mut String, center: (f32, f32), arc: &RingArc) {
    let cap = if arc.round_cap { "round" } else { "butt" };
    let d = describe_arc(center, arc.radius, arc.start_angle, arc.arc_angle);
    svg.push_str(&format!(
        "<path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\" stroke-linecap=\"{cap}\"/>",
        arc.color, arc.stroke_width
    ));
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Inter".to_string();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(400.0, 400.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartSpec, Section, StrokeCap};
    use crate::config::ChartConfig;
    use crate::layout::compute_layout;

    fn render(spec: &ChartSpec) -> String {
        let theme = Theme::light();
        let layout = compute_layout(spec, &theme, &ChartConfig::default());
        render_svg(&layout, &theme)
    }

    fn donut_spec() -> ChartSpec {
        let mut spec = ChartSpec::new(100.0);
        spec.inner_radius = 70.0;
        spec.background_color = "#EEF2F8".to_string();
        spec.sections = vec![Section::new(40.0, "#FF3B30"), Section::new(35.0, "#007AFF")];
        spec
    }

    #[test]
    fn renders_canvas_sized_to_diameter() {
        let svg = render(&donut_spec());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("width=\"200\" height=\"200\""), "{svg}");
        assert!(svg.contains("viewBox=\"0 0 200 200\""));
    }

    #[test]
    fn background_ring_precedes_sections_and_text() {
        let mut spec = donut_spec();
        spec.show_center_text = true;
        spec.center_value = Some("75%".to_string());
        let svg = render(&spec);

        let background = svg.find("#EEF2F8").expect("background ring");
        let section = svg.find("#FF3B30").expect("first section");
        let text = svg.find("<text").expect("center text");
        assert!(background < section);
        assert!(section < text);
    }

    #[test]
    fn full_background_ring_uses_two_arc_segments() {
        let mut spec = donut_spec();
        spec.sections.clear();
        let svg = render(&spec);
        assert_eq!(svg.matches("A ").count(), 2);
    }

    #[test]
    fn round_caps_only_when_requested() {
        let butt = render(&donut_spec());
        assert!(!butt.contains("stroke-linecap=\"round\""));

        let mut spec = donut_spec();
        spec.stroke_cap = StrokeCap::Round;
        spec.divider_size = 3.0;
        let round = render(&spec);
        assert!(round.contains("stroke-linecap=\"round\""));
    }

    #[test]
    fn center_text_is_escaped() {
        let mut spec = donut_spec();
        spec.show_center_text = true;
        spec.center_value = Some("7/10".to_string());
        spec.center_label = Some("R&D <done>".to_string());
        let svg = render(&spec);
        assert!(svg.contains("R&amp;D &lt;done&gt;"));
        assert!(!svg.contains("<done>"));
    }

    #[test]
    fn sections_render_as_stroked_paths() {
        let svg = render(&donut_spec());
        // ring thickness 30 at mid-line radius 85
        assert!(svg.contains("stroke-width=\"30.00\""), "{svg}");
        assert!(svg.contains("fill=\"none\""));
    }
}
