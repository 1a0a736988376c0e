//! # Corner Rounding Geometry
//!
//! Pure outline construction for rectangles with a selectable subset of
//! rounded corners. egui's `Rounding` only applies to solid rect fills, so
//! shapes that need a gradient fill (the chart bars) are built from the
//! explicit outline produced here and filled with a vertex-colored mesh.
//!
//! ## Key Items:
//! - `Corners` - which corners of a rectangle to round
//! - `rounded_rect_path()` - closed clockwise outline with quarter arcs at
//!   the selected corners and sharp points everywhere else
//!
//! The functions are deterministic and total: degenerate rectangles and
//! oversized radii degrade to sensible outlines instead of failing.

use eframe::egui;
use std::f32::consts::PI;

/// Selects which corners of a rectangle are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Corners {
    /// No rounding; the outline is the plain rectangle.
    pub const NONE: Corners = Corners {
        top_left: false,
        top_right: false,
        bottom_left: false,
        bottom_right: false,
    };

    /// Round all four corners.
    pub const ALL: Corners = Corners {
        top_left: true,
        top_right: true,
        bottom_left: true,
        bottom_right: true,
    };

    /// Round only the top corners; the shape sits flush on its baseline.
    pub const TOP: Corners = Corners {
        top_left: true,
        top_right: true,
        bottom_left: false,
        bottom_right: false,
    };

    /// Round only the bottom corners.
    pub const BOTTOM: Corners = Corners {
        top_left: false,
        top_right: false,
        bottom_left: true,
        bottom_right: true,
    };

    /// Whether any corner is selected.
    pub fn any(self) -> bool {
        self.top_left || self.top_right || self.bottom_left || self.bottom_right
    }
}

/// Build a closed clockwise outline of `rect` with the selected corners
/// rounded at `radius` and the remaining corners left as exact right angles.
///
/// The radius is clamped to half the rectangle's short side. The result is a
/// convex polygon suitable for `egui::Shape::convex_polygon` or a fan mesh.
pub fn rounded_rect_path(rect: egui::Rect, radius: f32, corners: Corners) -> Vec<egui::Pos2> {
    let mut points = Vec::new();

    let (left, top, right, bottom) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let short_side = rect.width().min(rect.height());
    let radius = radius.clamp(0.0, (short_side / 2.0).max(0.0));

    if radius <= 0.0 || !corners.any() || short_side <= 0.0 {
        // Plain rectangle, including the degenerate (zero-sized) case.
        push_point(&mut points, egui::pos2(left, top));
        push_point(&mut points, egui::pos2(right, top));
        push_point(&mut points, egui::pos2(right, bottom));
        push_point(&mut points, egui::pos2(left, bottom));
        return points;
    }

    // Clockwise walk in screen coordinates (y grows downward): top-left,
    // top-right, bottom-right, bottom-left. Each rounded corner contributes
    // a quarter arc; each square corner contributes its single sharp point.
    if corners.top_left {
        push_arc(&mut points, egui::pos2(left + radius, top + radius), radius, PI, 1.5 * PI);
    } else {
        push_point(&mut points, egui::pos2(left, top));
    }

    if corners.top_right {
        push_arc(&mut points, egui::pos2(right - radius, top + radius), radius, 1.5 * PI, 2.0 * PI);
    } else {
        push_point(&mut points, egui::pos2(right, top));
    }

    if corners.bottom_right {
        push_arc(&mut points, egui::pos2(right - radius, bottom - radius), radius, 0.0, 0.5 * PI);
    } else {
        push_point(&mut points, egui::pos2(right, bottom));
    }

    if corners.bottom_left {
        push_arc(&mut points, egui::pos2(left + radius, bottom - radius), radius, 0.5 * PI, PI);
    } else {
        push_point(&mut points, egui::pos2(left, bottom));
    }

    // When the radius equals half an edge, adjacent arcs meet in one point;
    // the closing edge can do the same. Drop the duplicate.
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    points
}

/// Append a point, skipping exact duplicates of the previous one.
fn push_point(points: &mut Vec<egui::Pos2>, point: egui::Pos2) {
    if points.last() != Some(&point) {
        points.push(point);
    }
}

/// Append a quarter arc as short line segments, inclusive of both endpoints.
///
/// Segment count follows arc length (roughly one segment per 3 px) so small
/// radii stay cheap and large ones stay smooth.
fn push_arc(
    points: &mut Vec<egui::Pos2>,
    center: egui::Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
) {
    let arc_length = (end_angle - start_angle).abs() * radius;
    let num_segments = ((arc_length / 3.0).ceil() as usize).clamp(2, 32);

    let angle_step = (end_angle - start_angle) / num_segments as f32;
    for i in 0..=num_segments {
        let angle = start_angle + angle_step * i as f32;
        push_point(
            points,
            egui::pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, Rect};

    fn contains_point(points: &[egui::Pos2], target: egui::Pos2) -> bool {
        points
            .iter()
            .any(|p| (p.x - target.x).abs() < 1e-4 && (p.y - target.y).abs() < 1e-4)
    }

    fn rect_100x60() -> Rect {
        Rect::from_min_size(pos2(10.0, 20.0), egui::vec2(100.0, 60.0))
    }

    #[test]
    fn test_top_only_keeps_bottom_corners_square() {
        let rect = rect_100x60();
        let points = rounded_rect_path(rect, 8.0, Corners::TOP);

        // Bottom corners are present as exact sharp points.
        assert!(contains_point(&points, rect.right_bottom()));
        assert!(contains_point(&points, rect.left_bottom()));

        // Top sharp corners are absent (replaced by arcs).
        assert!(!contains_point(&points, rect.left_top()));
        assert!(!contains_point(&points, rect.right_top()));
    }

    #[test]
    fn test_bottom_corners_are_right_angles() {
        let rect = rect_100x60();
        let points = rounded_rect_path(rect, 8.0, Corners::TOP);

        let corner_index = points
            .iter()
            .position(|p| *p == rect.right_bottom())
            .expect("bottom-right corner point missing");
        let prev = points[(corner_index + points.len() - 1) % points.len()];
        let next = points[(corner_index + 1) % points.len()];
        let corner = points[corner_index];

        let v1 = prev - corner;
        let v2 = next - corner;
        assert!(v1.length() > 0.0 && v2.length() > 0.0);
        assert!((v1.dot(v2)).abs() < 1e-4, "edges at the square corner must be perpendicular");
    }

    #[test]
    fn test_rounded_corner_clears_the_sharp_corner_by_the_radius() {
        let rect = rect_100x60();
        let radius = 8.0;
        let points = rounded_rect_path(rect, radius, Corners::TOP);

        // The closest approach of a quarter arc to its sharp corner is
        // radius * (sqrt(2) - 1).
        let expected_clearance = radius * (2.0_f32.sqrt() - 1.0);
        let min_distance = points
            .iter()
            .map(|p| (*p - rect.left_top()).length())
            .fold(f32::INFINITY, f32::min);
        assert!(min_distance >= expected_clearance - 1e-3);
    }

    #[test]
    fn test_all_points_stay_inside_the_rect() {
        let rect = rect_100x60();
        for corners in [Corners::TOP, Corners::ALL, Corners::BOTTOM, Corners::NONE] {
            for point in rounded_rect_path(rect, 12.0, corners) {
                assert!(point.x >= rect.left() - 1e-4 && point.x <= rect.right() + 1e-4);
                assert!(point.y >= rect.top() - 1e-4 && point.y <= rect.bottom() + 1e-4);
            }
        }
    }

    #[test]
    fn test_zero_radius_yields_plain_rectangle() {
        let rect = rect_100x60();
        let points = rounded_rect_path(rect, 0.0, Corners::ALL);
        assert_eq!(points.len(), 4);
        assert!(contains_point(&points, rect.left_top()));
        assert!(contains_point(&points, rect.right_bottom()));
    }

    #[test]
    fn test_oversized_radius_is_clamped() {
        let rect = rect_100x60();
        let points = rounded_rect_path(rect, 1_000.0, Corners::ALL);

        for point in &points {
            assert!(point.x.is_finite() && point.y.is_finite());
            assert!(point.x >= rect.left() - 1e-3 && point.x <= rect.right() + 1e-3);
            assert!(point.y >= rect.top() - 1e-3 && point.y <= rect.bottom() + 1e-3);
        }
    }

    #[test]
    fn test_degenerate_rect_does_not_fail() {
        let rect = Rect::from_min_size(pos2(5.0, 5.0), egui::vec2(0.0, 0.0));
        let points = rounded_rect_path(rect, 3.0, Corners::TOP);
        assert!(!points.is_empty());
        for point in &points {
            assert!(point.x.is_finite() && point.y.is_finite());
        }
    }

    #[test]
    fn test_deterministic_for_equal_inputs() {
        let rect = rect_100x60();
        let a = rounded_rect_path(rect, 3.0, Corners::TOP);
        let b = rounded_rect_path(rect, 3.0, Corners::TOP);
        assert_eq!(a, b);
    }
}
