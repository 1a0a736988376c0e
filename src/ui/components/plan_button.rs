//! # Plan Button
//!
//! The pill-shaped call to action at the bottom of the screen: colored
//! fill, white outline, drop shadow, bold label. Stateless; fires the
//! caller's action exactly once per click.

use eframe::egui;

use crate::ui::components::styling::draw_drop_shadow;
use crate::ui::components::theme::colors;

/// Corner radius of the pill.
pub const PLAN_BUTTON_CORNER_RADIUS: f32 = 28.66;

/// The button never grows wider than this.
pub const PLAN_BUTTON_MAX_WIDTH: f32 = 350.0;

/// 20 pt label with 20 of padding above and below.
pub const PLAN_BUTTON_HEIGHT: f32 = 60.0;

/// Gap kept under the button.
pub const PLAN_BUTTON_BOTTOM_PADDING: f32 = 10.0;

pub const PLAN_BUTTON_LABEL: &str = "Get Premium";

const LABEL_FONT_SIZE: f32 = 20.0;

pub struct PlanButton<F: FnOnce()> {
    on_show_plan: F,
}

impl<F: FnOnce()> PlanButton<F> {
    pub fn new(on_show_plan: F) -> Self {
        Self { on_show_plan }
    }

    /// Draw the button into `rect` and invoke the action if clicked.
    pub fn show(self, ui: &mut egui::Ui, rect: egui::Rect) -> egui::Response {
        let response = ui
            .allocate_rect(rect, egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        let fill = if response.hovered() {
            colors::PLAN_FILL_HOVER
        } else {
            colors::PLAN_FILL
        };

        let rounding = egui::Rounding::same(PLAN_BUTTON_CORNER_RADIUS);
        let painter = ui.painter();
        draw_drop_shadow(painter, rect, rounding, egui::vec2(0.0, 2.0), colors::BUTTON_SHADOW);
        painter.rect_filled(rect, rounding, fill);
        painter.rect_stroke(rect, rounding, egui::Stroke::new(1.0, colors::PLAN_OUTLINE));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            PLAN_BUTTON_LABEL,
            egui::FontId::proportional(LABEL_FONT_SIZE),
            colors::TEXT_WHITE,
        );

        if response.clicked() {
            (self.on_show_plan)();
        }
        response
    }
}
