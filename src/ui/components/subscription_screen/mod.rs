//! # Subscription Screen
//!
//! The composite upsell screen: gradient background, close control, title
//! lines, animated chart, captions and the call-to-action pill. This module
//! is pure composition; it owns no business logic. The close and show-plan
//! actions are caller-supplied callbacks with logging defaults, so the
//! screen can be embedded without any host wiring.

pub mod layout;

use eframe::egui;

use crate::ui::components::bar_chart::BarChart;
use crate::ui::components::close_button::CloseButton;
use crate::ui::components::plan_button::PlanButton;
use crate::ui::components::styling::{draw_gradient_text, draw_vertical_gradient};
use crate::ui::components::theme::colors;

use self::layout::{ScreenLayout, CAPTION_FONT_SIZE, PHRASE_FONT_SIZE};

pub const TITLE_FIRST_LINE: &str = "Unlock";
pub const TITLE_SECOND_LINE: &str = "Premium";
pub const CAPTION_LINE: &str = "Subscribe today and";
pub const GRADIENT_PHRASE: &str = "Level up";

type Action = Box<dyn FnMut()>;

/// The full-screen subscription upsell view.
pub struct SubscriptionScreen {
    chart: BarChart,
    on_close: Action,
    on_show_plan: Action,
}

impl SubscriptionScreen {
    /// Screen with diagnostic default actions that only log.
    pub fn new() -> Self {
        Self::with_actions(
            || log::info!("👋 Close tapped (no host action wired)"),
            || log::info!("💳 Show-plan tapped (no host action wired)"),
        )
    }

    /// Screen with host-supplied close and show-plan actions.
    pub fn with_actions(
        on_close: impl FnMut() + 'static,
        on_show_plan: impl FnMut() + 'static,
    ) -> Self {
        Self {
            chart: BarChart::new(),
            on_close: Box::new(on_close),
            on_show_plan: Box::new(on_show_plan),
        }
    }

    pub fn chart(&self) -> &BarChart {
        &self.chart
    }

    /// Restart the chart's entrance animation.
    pub fn reset_entrance(&mut self) {
        self.chart.reset();
    }

    /// Invoke the close action programmatically (keyboard shortcut, host
    /// code). Same contract as clicking the close control.
    pub fn request_close(&mut self) {
        (self.on_close)();
    }

    /// Render the whole screen into the available rect.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let area = ui.available_rect_before_wrap();
        let layout = ScreenLayout::new(area);

        draw_vertical_gradient(
            ui.painter(),
            area,
            colors::BACKGROUND_TOP,
            colors::BACKGROUND_BOTTOM,
        );

        let title_font = egui::FontId::proportional(layout.title_font_size);
        ui.painter().text(
            layout.title_first_rect.center(),
            egui::Align2::CENTER_CENTER,
            TITLE_FIRST_LINE,
            title_font.clone(),
            colors::TEXT_PRIMARY,
        );
        ui.painter().text(
            layout.title_second_rect.center(),
            egui::Align2::CENTER_CENTER,
            TITLE_SECOND_LINE,
            title_font,
            colors::TEXT_PRIMARY,
        );

        self.chart.show(ui, layout.chart_area);

        ui.painter().text(
            layout.caption_rect.center(),
            egui::Align2::CENTER_CENTER,
            CAPTION_LINE,
            egui::FontId::proportional(CAPTION_FONT_SIZE),
            colors::TEXT_PRIMARY,
        );
        draw_gradient_text(
            ui,
            layout.phrase_rect,
            GRADIENT_PHRASE,
            PHRASE_FONT_SIZE,
            colors::BAR_GRADIENT_TOP,
            colors::BAR_GRADIENT_BOTTOM,
        );

        // Buttons last so they sit on top of everything for interaction.
        CloseButton::new(&mut self.on_close).show(ui, layout.close_rect);
        PlanButton::new(&mut self.on_show_plan).show(ui, layout.plan_rect);
    }
}

impl Default for SubscriptionScreen {
    fn default() -> Self {
        Self::new()
    }
}
