//! # Bar Chart Renderer
//!
//! Painter-level drawing for the chart: gradient-filled bars clipped to a
//! top-rounded outline, labels under the baseline, and the mascot image
//! overlay with a painted fallback when the asset cannot load.

use eframe::egui;

use crate::ui::components::bar_chart::animation::RevealAnimation;
use crate::ui::components::bar_chart::layout::{BarChartLayout, BAR_CORNER_RADIUS, LABEL_FONT_SIZE};
use crate::ui::components::rounded_corners::{rounded_rect_path, Corners};
use crate::ui::components::styling::draw_convex_polygon_vertical_gradient;
use crate::ui::components::theme::colors;

use super::BarDatum;

/// Height of bar `index` at time `now`: the eased reveal progress applied to
/// the bar's target height. Independent of every other bar.
pub fn rendered_bar_height(
    layout: &BarChartLayout,
    datum: &BarDatum,
    animation: &RevealAnimation,
    index: usize,
    now: f64,
) -> f32 {
    layout.target_bar_height(datum.ratio) * animation.progress(index, now)
}

/// Draw the bottom-aligned bar row at its current animation state.
pub fn draw_bar_row(
    painter: &egui::Painter,
    layout: &BarChartLayout,
    data: &[BarDatum],
    animation: &RevealAnimation,
    now: f64,
) {
    for (index, datum) in data.iter().enumerate() {
        let height = rendered_bar_height(layout, datum, animation, index, now);
        if height <= 0.0 {
            continue;
        }
        let rect = layout.bar_rect(index, data.len(), height);
        let outline = rounded_rect_path(rect, BAR_CORNER_RADIUS, Corners::TOP);
        draw_convex_polygon_vertical_gradient(
            painter,
            &outline,
            rect,
            colors::BAR_GRADIENT_TOP,
            colors::BAR_GRADIENT_BOTTOM,
        );
    }
}

/// Draw each datum's label just below the baseline, centered under its bar.
pub fn draw_bar_labels(painter: &egui::Painter, layout: &BarChartLayout, data: &[BarDatum]) {
    for (index, datum) in data.iter().enumerate() {
        painter.text(
            layout.label_anchor(index, data.len()),
            egui::Align2::CENTER_TOP,
            &datum.label,
            egui::FontId::proportional(LABEL_FONT_SIZE),
            colors::BAR_LABEL,
        );
    }
}

/// Draw the mascot image into `rect`, falling back to a painted placeholder
/// if the bundled asset cannot be loaded.
pub fn draw_mascot(ui: &mut egui::Ui, rect: egui::Rect) {
    if !rect.is_positive() {
        return;
    }

    let image = egui::Image::new(egui::include_image!("../../../../assets/mascot.svg"));
    match image.load_for_size(ui.ctx(), rect.size()) {
        Ok(_) => {
            image.paint_at(ui, rect);
        }
        Err(_) => {
            draw_mascot_fallback(ui.painter(), rect);
        }
    }
}

/// Painted stand-in: a friendly blue blob with an eye, so the chart still
/// reads correctly without the asset.
fn draw_mascot_fallback(painter: &egui::Painter, rect: egui::Rect) {
    let body_radius = rect.height().min(rect.width()) * 0.35;
    let body_center = rect.center();

    painter.circle_filled(body_center, body_radius, colors::BAR_GRADIENT_BOTTOM);
    painter.circle_filled(
        body_center + egui::vec2(-body_radius * 0.3, -body_radius * 0.2),
        body_radius * 0.22,
        egui::Color32::WHITE,
    );
    painter.circle_filled(
        body_center + egui::vec2(-body_radius * 0.3, -body_radius * 0.2),
        body_radius * 0.1,
        colors::TEXT_PRIMARY,
    );
}
