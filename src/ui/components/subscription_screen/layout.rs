//! # Screen Layout
//!
//! Geometry for the composite upsell screen, derived once per pass from the
//! measured available rect and threaded down to the components. No global
//! screen-size lookup; callers hand the area in.
//!
//! ## Arrangement (top to bottom):
//! close row, two title lines at 10% of the width, the chart (which anchors
//! its own baseline off the bottom padding), caption line, fixed-size
//! gradient phrase box, pill button at the bottom.

use eframe::egui;

use crate::ui::components::close_button::{CLOSE_BUTTON_DIAMETER, TRAILING_INSET_FRACTION};
use crate::ui::components::plan_button::{
    PLAN_BUTTON_BOTTOM_PADDING, PLAN_BUTTON_HEIGHT, PLAN_BUTTON_MAX_WIDTH,
};

/// Title font size as a fraction of the available width.
pub const TITLE_FONT_FRACTION: f32 = 0.1;

/// Caption line font size.
pub const CAPTION_FONT_SIZE: f32 = 20.0;

/// Gradient phrase font size.
pub const PHRASE_FONT_SIZE: f32 = 30.0;

/// Fixed box the gradient phrase is masked into.
pub const PHRASE_BOX_WIDTH: f32 = 277.9;
pub const PHRASE_BOX_HEIGHT: f32 = 45.0;

/// The caption group floats this fraction of the height above the button
/// (`height / 40`).
pub const CAPTION_GROUP_GAP_DIVISOR: f32 = 40.0;

const CLOSE_TOP_INSET: f32 = 16.0;
const TITLE_TOP_GAP: f32 = 8.0;
const TITLE_LINE_FACTOR: f32 = 1.25;
const CAPTION_LINE_FACTOR: f32 = 1.3;
const CAPTION_PHRASE_GAP: f32 = 4.0;
const PLAN_SIDE_MARGIN: f32 = 20.0;

/// Resolved screen geometry for one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub area: egui::Rect,
    pub title_font_size: f32,
    pub close_rect: egui::Rect,
    pub title_first_rect: egui::Rect,
    pub title_second_rect: egui::Rect,
    /// The chart draws into the full area and derives its own baseline.
    pub chart_area: egui::Rect,
    pub caption_rect: egui::Rect,
    pub phrase_rect: egui::Rect,
    pub plan_rect: egui::Rect,
}

impl ScreenLayout {
    pub fn new(area: egui::Rect) -> Self {
        let width = area.width().max(0.0);
        let height = area.height().max(0.0);
        let center_x = area.center().x;

        let close_rect = egui::Rect::from_min_size(
            egui::pos2(
                area.right() - width * TRAILING_INSET_FRACTION - CLOSE_BUTTON_DIAMETER,
                area.top() + CLOSE_TOP_INSET,
            ),
            egui::vec2(CLOSE_BUTTON_DIAMETER, CLOSE_BUTTON_DIAMETER),
        );

        let title_font_size = width * TITLE_FONT_FRACTION;
        let title_line_height = title_font_size * TITLE_LINE_FACTOR;
        let title_first_rect = egui::Rect::from_min_size(
            egui::pos2(area.left(), close_rect.bottom() + TITLE_TOP_GAP),
            egui::vec2(width, title_line_height),
        );
        let title_second_rect =
            title_first_rect.translate(egui::vec2(0.0, title_line_height));

        // Bottom-up: button at the bottom edge, captions stacked above it.
        let plan_width = (width - 2.0 * PLAN_SIDE_MARGIN).clamp(0.0, PLAN_BUTTON_MAX_WIDTH);
        let plan_bottom = area.bottom() - PLAN_BUTTON_BOTTOM_PADDING;
        let plan_rect = egui::Rect::from_min_size(
            egui::pos2(
                center_x - plan_width / 2.0,
                plan_bottom - PLAN_BUTTON_HEIGHT,
            ),
            egui::vec2(plan_width, PLAN_BUTTON_HEIGHT),
        );

        let phrase_bottom = plan_rect.top() - height / CAPTION_GROUP_GAP_DIVISOR;
        let phrase_rect = egui::Rect::from_min_size(
            egui::pos2(
                center_x - PHRASE_BOX_WIDTH / 2.0,
                phrase_bottom - PHRASE_BOX_HEIGHT,
            ),
            egui::vec2(PHRASE_BOX_WIDTH, PHRASE_BOX_HEIGHT),
        );

        let caption_height = CAPTION_FONT_SIZE * CAPTION_LINE_FACTOR;
        let caption_rect = egui::Rect::from_min_size(
            egui::pos2(
                area.left(),
                phrase_rect.top() - CAPTION_PHRASE_GAP - caption_height,
            ),
            egui::vec2(width, caption_height),
        );

        Self {
            area,
            title_font_size,
            close_rect,
            title_first_rect,
            title_second_rect,
            chart_area: area,
            caption_rect,
            phrase_rect,
            plan_rect,
        }
    }
}
