//! # Bar Chart Layout
//!
//! Pure geometry for the chart: bar sizes, the bottom-aligned bar row, the
//! label strip and the mascot overlay. Everything is derived from the area
//! the chart is given for the current pass; nothing is cached.
//!
//! ## Proportions:
//! Bars are `13%` of the area width with `5%` gaps, growing up to `42%` of
//! the area height. The bar row is centered on the area and sits flush on a
//! baseline lifted off the bottom edge by a two-tier padding (200 for short
//! areas, 400 from 800 px up). The mascot is `50% x 22%` of the area with a
//! small leading inset.

use eframe::egui;

/// Bar width as a fraction of the chart area width.
pub const BAR_WIDTH_FRACTION: f32 = 0.13;

/// Horizontal gap between bars as a fraction of the area width.
pub const BAR_GAP_FRACTION: f32 = 0.05;

/// Tallest bar height as a fraction of the area height.
pub const MAX_BAR_HEIGHT_FRACTION: f32 = 0.42;

/// Corner radius of the rounded bar tops.
pub const BAR_CORNER_RADIUS: f32 = 3.0;

/// Font size of the labels under the bars.
pub const LABEL_FONT_SIZE: f32 = 12.0;

/// Vertical gap between the baseline and the label tops.
pub const LABEL_GAP: f32 = 6.0;

/// Slot the bar row is visually centered in, as fractions of the area.
pub const SLOT_WIDTH_FRACTION: f32 = 0.6;
pub const SLOT_HEIGHT_FRACTION: f32 = 0.3;

/// Mascot image size as fractions of the area.
pub const MASCOT_WIDTH_FRACTION: f32 = 0.5;
pub const MASCOT_HEIGHT_FRACTION: f32 = 0.22;

/// Leading inset of the mascot from the area's left edge.
pub const MASCOT_LEADING_INSET: f32 = 10.0;

/// The mascot's centering band gives up this fraction of the area height at
/// the bottom of the slot (`height / 3.5`).
pub const MASCOT_BOTTOM_RESERVATION_DIVISOR: f32 = 3.5;

/// Areas shorter than this use the small-screen bottom padding.
pub const SMALL_AREA_BREAKPOINT: f32 = 800.0;

/// Bottom padding below the baseline: 200 on short areas, 400 otherwise.
pub fn bottom_padding(area_height: f32) -> f32 {
    if area_height < SMALL_AREA_BREAKPOINT {
        200.0
    } else {
        400.0
    }
}

/// Resolved chart geometry for one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct BarChartLayout {
    pub area: egui::Rect,
    pub bar_width: f32,
    pub bar_gap: f32,
    pub max_bar_height: f32,
    /// Bars sit flush on this line; labels hang just below it.
    pub baseline_y: f32,
}

impl BarChartLayout {
    pub fn new(area: egui::Rect) -> Self {
        let width = area.width().max(0.0);
        let height = area.height().max(0.0);
        Self {
            area,
            bar_width: width * BAR_WIDTH_FRACTION,
            bar_gap: width * BAR_GAP_FRACTION,
            max_bar_height: height * MAX_BAR_HEIGHT_FRACTION,
            baseline_y: area.bottom() - bottom_padding(height),
        }
    }

    /// Final height of a bar with the given fill ratio.
    ///
    /// Ratios are clamped into `[0, 1]`, so malformed data degrades to a
    /// zero or full bar instead of failing.
    pub fn target_bar_height(&self, ratio: f32) -> f32 {
        self.max_bar_height * ratio.clamp(0.0, 1.0)
    }

    /// Total width of a row of `bar_count` bars including gaps.
    pub fn row_width(&self, bar_count: usize) -> f32 {
        if bar_count == 0 {
            return 0.0;
        }
        bar_count as f32 * self.bar_width + (bar_count - 1) as f32 * self.bar_gap
    }

    /// Rect of bar `index` at the given rendered height, bottom-aligned on
    /// the baseline, with the whole row centered on the area.
    pub fn bar_rect(&self, index: usize, bar_count: usize, height: f32) -> egui::Rect {
        let row_left = self.area.center().x - self.row_width(bar_count) / 2.0;
        let left = row_left + index as f32 * (self.bar_width + self.bar_gap);
        let height = height.max(0.0);
        egui::Rect::from_min_size(
            egui::pos2(left, self.baseline_y - height),
            egui::vec2(self.bar_width, height),
        )
    }

    /// Center-top anchor for the label under bar `index`.
    pub fn label_anchor(&self, index: usize, bar_count: usize) -> egui::Pos2 {
        let bar = self.bar_rect(index, bar_count, 0.0);
        egui::pos2(bar.center().x, self.baseline_y + LABEL_GAP)
    }

    /// The 60% x 30% slot the chart is composed into, bottom-anchored on the
    /// baseline. Bars and mascot may overflow it; it exists for composition.
    pub fn slot_rect(&self) -> egui::Rect {
        let size = egui::vec2(
            self.area.width() * SLOT_WIDTH_FRACTION,
            self.area.height() * SLOT_HEIGHT_FRACTION,
        );
        egui::Rect::from_min_size(
            egui::pos2(
                self.area.center().x - size.x / 2.0,
                self.baseline_y - size.y,
            ),
            size,
        )
    }

    /// Rect of the decorative mascot image.
    ///
    /// Leading inset from the area's left edge; vertically centered in the
    /// slot's band after giving up `height / 3.5` at the bottom, which
    /// floats the mascot above the growing bars.
    pub fn mascot_rect(&self) -> egui::Rect {
        let size = egui::vec2(
            self.area.width() * MASCOT_WIDTH_FRACTION,
            self.area.height() * MASCOT_HEIGHT_FRACTION,
        );
        let slot = self.slot_rect();
        let reservation = self.area.height() / MASCOT_BOTTOM_RESERVATION_DIVISOR;
        let band_center_y = (slot.top() + slot.bottom() - reservation) / 2.0;
        egui::Rect::from_min_size(
            egui::pos2(
                self.area.left() + MASCOT_LEADING_INSET,
                band_center_y - size.y / 2.0,
            ),
            size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2, Rect};

    fn layout_300x600() -> BarChartLayout {
        BarChartLayout::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(300.0, 600.0)))
    }

    #[test]
    fn test_worked_example_bar_heights() {
        // 300x600 area with the standard ratios.
        let layout = layout_300x600();
        let ratios = [0.22, 0.33, 0.73, 1.0];
        let expected = [55.44, 83.16, 183.96, 252.0];

        for (ratio, expected) in ratios.iter().zip(expected.iter()) {
            let height = layout.target_bar_height(*ratio);
            assert!(
                (height - expected).abs() < 1e-2,
                "ratio {} gave height {}, expected {}",
                ratio,
                height,
                expected
            );
        }
    }

    #[test]
    fn test_bottom_padding_tiers() {
        assert_eq!(bottom_padding(600.0), 200.0);
        assert_eq!(bottom_padding(799.9), 200.0);
        assert_eq!(bottom_padding(800.0), 400.0);
        assert_eq!(bottom_padding(1000.0), 400.0);
    }

    #[test]
    fn test_baseline_sits_padding_above_bottom() {
        let layout = layout_300x600();
        assert!((layout.baseline_y - 400.0).abs() < 1e-3);

        let tall = BarChartLayout::new(Rect::from_min_size(
            pos2(0.0, 0.0),
            vec2(450.0, 900.0),
        ));
        assert!((tall.baseline_y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_ratios_outside_unit_range_are_clamped() {
        let layout = layout_300x600();
        assert_eq!(layout.target_bar_height(-0.5), 0.0);
        assert!((layout.target_bar_height(1.5) - layout.max_bar_height).abs() < 1e-3);
    }

    #[test]
    fn test_bars_bottom_align_on_baseline() {
        let layout = layout_300x600();
        for (index, height) in [(0, 55.44), (1, 83.16), (2, 183.96), (3, 252.0)] {
            let rect = layout.bar_rect(index, 4, height);
            assert!((rect.bottom() - layout.baseline_y).abs() < 1e-3);
            assert!((rect.height() - height).abs() < 1e-3);
            assert!((rect.width() - 300.0 * BAR_WIDTH_FRACTION).abs() < 1e-3);
        }
    }

    #[test]
    fn test_bar_row_is_centered_with_even_gaps() {
        let layout = layout_300x600();
        let first = layout.bar_rect(0, 4, 10.0);
        let last = layout.bar_rect(3, 4, 10.0);

        // Row symmetric about the area center.
        let center = layout.area.center().x;
        assert!(((center - first.left()) - (last.right() - center)).abs() < 1e-3);

        for index in 0..3 {
            let gap = layout.bar_rect(index + 1, 4, 10.0).left()
                - layout.bar_rect(index, 4, 10.0).right();
            assert!((gap - layout.bar_gap).abs() < 1e-3);
        }
    }

    #[test]
    fn test_row_width_counts_gaps() {
        let layout = layout_300x600();
        assert_eq!(layout.row_width(0), 0.0);
        assert!((layout.row_width(1) - layout.bar_width).abs() < 1e-3);
        let expected = 4.0 * layout.bar_width + 3.0 * layout.bar_gap;
        assert!((layout.row_width(4) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_labels_hang_below_baseline() {
        let layout = layout_300x600();
        let anchor = layout.label_anchor(2, 4);
        assert!(anchor.y > layout.baseline_y);
        let bar = layout.bar_rect(2, 4, 50.0);
        assert!((anchor.x - bar.center().x).abs() < 1e-3);
    }

    #[test]
    fn test_slot_fractions_and_anchor() {
        let layout = layout_300x600();
        let slot = layout.slot_rect();
        assert!((slot.width() - 180.0).abs() < 1e-3);
        assert!((slot.height() - 180.0).abs() < 1e-3);
        assert!((slot.bottom() - layout.baseline_y).abs() < 1e-3);
        assert!((slot.center().x - layout.area.center().x).abs() < 1e-3);
    }

    #[test]
    fn test_mascot_rect_size_and_inset() {
        let layout = layout_300x600();
        let mascot = layout.mascot_rect();
        assert!((mascot.width() - 150.0).abs() < 1e-3);
        assert!((mascot.height() - 132.0).abs() < 1e-3);
        assert!((mascot.left() - MASCOT_LEADING_INSET).abs() < 1e-3);

        // Centered in the slot band left over above the h/3.5 reservation.
        let slot = layout.slot_rect();
        let expected_center = (slot.top() + slot.bottom() - 600.0 / 3.5) / 2.0;
        assert!((mascot.center().y - expected_center).abs() < 1e-3);
    }

    #[test]
    fn test_zero_area_degrades_to_zero_geometry() {
        let layout = BarChartLayout::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(0.0, 0.0)));
        assert_eq!(layout.bar_width, 0.0);
        assert_eq!(layout.max_bar_height, 0.0);
        assert_eq!(layout.target_bar_height(0.7), 0.0);
        let rect = layout.bar_rect(0, 4, layout.target_bar_height(0.7));
        assert!(rect.width().abs() < 1e-6);
        assert!(rect.height().abs() < 1e-6);
    }
}
