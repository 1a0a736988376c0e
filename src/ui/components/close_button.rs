//! # Close Button
//!
//! Circular dismiss control for the top-right of the screen. Stateless: it
//! draws itself into the rect it is given and fires the caller's action
//! exactly once per click. Whatever closing means (navigation, teardown) is
//! the caller's business.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Fixed diameter of the circular control.
pub const CLOSE_BUTTON_DIAMETER: f32 = 38.0;

/// Trailing inset from the right edge, as a fraction of the screen width.
pub const TRAILING_INSET_FRACTION: f32 = 0.06;

/// Font size of the glyph.
pub const GLYPH_FONT_SIZE: f32 = 20.0;

pub struct CloseButton<F: FnOnce()> {
    on_close: F,
}

impl<F: FnOnce()> CloseButton<F> {
    pub fn new(on_close: F) -> Self {
        Self { on_close }
    }

    /// Draw the button into `rect` and invoke the close action if clicked.
    pub fn show(self, ui: &mut egui::Ui, rect: egui::Rect) -> egui::Response {
        let response = ui
            .allocate_rect(rect, egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        let fill = if response.hovered() {
            colors::CLOSE_FILL_HOVER
        } else {
            colors::CLOSE_FILL
        };

        let center = rect.center();
        let radius = rect.width().min(rect.height()) / 2.0;
        let painter = ui.painter();
        painter.circle_filled(center + egui::vec2(0.0, 2.0), radius, colors::BUTTON_SHADOW);
        painter.circle_filled(center, radius, fill);
        // Nudged up a touch so the glyph reads optically centered.
        painter.text(
            center - egui::vec2(0.0, 1.0),
            egui::Align2::CENTER_CENTER,
            "×",
            egui::FontId::proportional(GLYPH_FONT_SIZE),
            colors::TEXT_PRIMARY,
        );

        if response.clicked() {
            (self.on_close)();
        }
        response
    }
}
