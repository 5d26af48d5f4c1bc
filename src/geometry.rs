//! Arc path construction. Angles are in degrees, 0 points up, values grow
//! clockwise.

/// Spans at or above this are drawn as a closed circle. A single SVG arc
/// command cannot sweep 360 degrees, so the threshold sits just under it.
pub const FULL_CIRCLE_THRESHOLD: f32 = 359.9;

/// Polar to Cartesian with a 90 degree rotation so angle 0 is "up".
///
/// Non-finite input degrades to the origin instead of propagating NaN into
/// a path string.
pub fn polar_to_cartesian(center: (f32, f32), radius: f32, angle: f32) -> (f32, f32) {
    if !center.0.is_finite() || !center.1.is_finite() || !radius.is_finite() || !angle.is_finite() {
        log::warn!(
            "non-finite polar input: center=({}, {}) radius={} angle={}",
            center.0,
            center.1,
            radius,
            angle
        );
        return (0.0, 0.0);
    }
    let radians = (angle - 90.0).to_radians();
    (
        center.0 + radius * radians.cos(),
        center.1 + radius * radians.sin(),
    )
}

/// Builds an SVG path for a circular arc starting at `start_angle` and
/// sweeping `arc_span` degrees clockwise.
///
/// Degenerate input (non-finite values or a span of zero or less) yields a
/// placeholder move-to at the start point, never a panic. Full-circle spans
/// are stitched from two half-circle arc commands.
pub fn describe_arc(center: (f32, f32), radius: f32, start_angle: f32, arc_span: f32) -> String {
    let degenerate = !center.0.is_finite()
        || !center.1.is_finite()
        || !radius.is_finite()
        || !start_angle.is_finite()
        || !arc_span.is_finite();
    if degenerate {
        log::warn!("degenerate arc: radius={radius} start={start_angle} span={arc_span}");
    }
    if degenerate || arc_span <= 0.0 {
        let (x, y) = if degenerate {
            (0.0, 0.0)
        } else {
            polar_to_cartesian(center, radius, start_angle)
        };
        return format!("M {x:.2} {y:.2}");
    }

    if arc_span >= FULL_CIRCLE_THRESHOLD {
        let (sx, sy) = polar_to_cartesian(center, radius, start_angle);
        let (mx, my) = polar_to_cartesian(center, radius, start_angle + 180.0);
        return format!(
            "M {sx:.2} {sy:.2} A {radius:.2} {radius:.2} 0 0 1 {mx:.2} {my:.2} A {radius:.2} {radius:.2} 0 0 1 {sx:.2} {sy:.2}"
        );
    }

    let (sx, sy) = polar_to_cartesian(center, radius, start_angle);
    let (ex, ey) = polar_to_cartesian(center, radius, start_angle + arc_span);
    let large_arc = if arc_span > 180.0 { 1 } else { 0 };
    format!("M {sx:.2} {sy:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {ex:.2} {ey:.2}")
}

/// Maps a section percentage to its arc span: `min(p / 100 * 360, 360)`,
/// with NaN and non-positive values collapsing to zero.
pub fn percent_to_arc_angle(percentage: f32) -> f32 {
    if !percentage.is_finite() || percentage <= 0.0 {
        return 0.0;
    }
    (percentage / 100.0 * 360.0).min(360.0)
}
