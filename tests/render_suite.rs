use std::path::Path;

use donut_chart_renderer::{ChartConfig, ChartSpec, Theme, compute_layout, load_chart, render_svg};

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
    assert!(!svg.contains("NaN"), "{fixture}: NaN leaked into output");
}

fn fixture_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn render_fixture(name: &str) -> String {
    let path = fixture_dir().join(name);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    let spec = ChartSpec::from_json5(&input).expect("parse failed");
    let theme = Theme::light();
    let config = ChartConfig::default();
    let layout = compute_layout(&spec, &theme, &config);
    render_svg(&layout, &theme)
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        "basic.json5",
        "donut_round.json5",
        "single.json5",
        "overfull.json5",
        "invalid_sections.json5",
    ];
    for name in candidates {
        let svg = render_fixture(name);
        assert_valid_svg(&svg, name);
    }
}

#[test]
fn basic_fixture_has_flat_caps_and_no_dividers() {
    let svg = render_fixture("basic.json5");
    assert!(!svg.contains("stroke-linecap=\"round\""));
    assert!(svg.contains("#FF3B30"));
    assert!(svg.contains("#007AFF"));
}

#[test]
fn round_fixture_emits_dividers_and_center_text() {
    let svg = render_fixture("donut_round.json5");
    assert!(svg.contains("stroke-linecap=\"round\""));
    assert!(svg.contains(">90%</text>"));
    assert!(svg.contains(">allocated</text>"));
    assert!(svg.contains("width=\"240\" height=\"240\""));
}

#[test]
fn single_fixture_renders_one_section_without_dividers() {
    let svg = render_fixture("single.json5");
    // one background ring (two arc segments) plus one partial section arc
    assert_eq!(svg.matches("A ").count(), 3);
    assert!(!svg.contains("stroke-linecap=\"round\""));
}

#[test]
fn load_chart_reads_fixture_files() {
    let spec = load_chart(&fixture_dir().join("basic.json5")).expect("load failed");
    assert_eq!(spec.sections.len(), 2);
    assert_eq!(spec.radius, 100.0);
}

#[test]
fn invalid_sections_do_not_reach_the_output() {
    let svg = render_fixture("invalid_sections.json5");
    assert!(svg.contains("#FFCC00"));
    assert!(!svg.contains("#FF3B30"));
    assert!(!svg.contains("definitely not a color"));
}
