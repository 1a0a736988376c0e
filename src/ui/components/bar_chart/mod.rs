//! # Bar Chart Component
//!
//! Animated projection chart for the upsell screen: a row of bottom-aligned
//! gradient bars that grow in one after another, labels under the baseline,
//! and the mascot floating above.
//!
//! ## Components:
//! - `BarDatum` - one bar's label and fill ratio
//! - `BarChart` - owns the data and the reveal animation, draws every frame
//! - `animation` - staggered reveal schedule and ease-out tween
//! - `layout` - pure geometry (bar rects, labels, mascot, padding)
//! - `renderer` - painter drawing

pub mod animation;
pub mod layout;
pub mod renderer;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::ui::components::bar_chart::animation::RevealAnimation;
use crate::ui::components::bar_chart::layout::BarChartLayout;

/// One bar of the projection chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    /// Fill fraction relative to the tallest bar, expected in `[0, 1]`.
    pub ratio: f32,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, ratio: f32) -> Self {
        Self {
            label: label.into(),
            ratio,
        }
    }

    /// The fixed four-step projection shown on the upsell screen.
    pub fn standard_projection() -> Vec<BarDatum> {
        vec![
            BarDatum::new("current", 0.22),
            BarDatum::new("3 months", 0.33),
            BarDatum::new("1 year", 0.73),
            BarDatum::new("2 years", 1.0),
        ]
    }
}

/// The animated bar chart.
///
/// Holds the datum list and the reveal schedule; both live exactly as long
/// as the chart. Dropping the chart discards any pending reveals.
pub struct BarChart {
    data: Vec<BarDatum>,
    animation: RevealAnimation,
}

impl BarChart {
    pub fn new() -> Self {
        Self::with_data(BarDatum::standard_projection())
    }

    pub fn with_data(data: Vec<BarDatum>) -> Self {
        Self {
            data,
            animation: RevealAnimation::new(),
        }
    }

    pub fn data(&self) -> &[BarDatum] {
        &self.data
    }

    pub fn bar_count(&self) -> usize {
        self.data.len()
    }

    /// Advance the reveal schedule; the first tick is the mount.
    pub fn tick(&mut self, now: f64) {
        self.animation.ensure_started(now);
    }

    /// Discard the schedule so the next tick starts a fresh entrance.
    pub fn reset(&mut self) {
        self.animation = RevealAnimation::new();
    }

    /// One reveal flag per datum: whether that bar's reveal time has passed.
    pub fn reveal_flags(&self, now: f64) -> Vec<bool> {
        (0..self.data.len())
            .map(|index| {
                self.animation
                    .reveal_time(index)
                    .map_or(false, |reveal| now >= reveal)
            })
            .collect()
    }

    /// Whether every bar has finished growing.
    pub fn is_settled(&self, now: f64) -> bool {
        self.animation.is_settled(self.data.len(), now)
    }

    /// Draw the chart into `area` at its current animation state.
    ///
    /// An empty datum list draws nothing. Repaints are requested only while
    /// some bar is still pending or mid-tween.
    pub fn show(&mut self, ui: &mut egui::Ui, area: egui::Rect) {
        if self.data.is_empty() {
            return;
        }

        let now = ui.input(|i| i.time);
        self.tick(now);

        let layout = BarChartLayout::new(area);
        renderer::draw_bar_row(ui.painter(), &layout, &self.data, &self.animation, now);
        renderer::draw_bar_labels(ui.painter(), &layout, &self.data);
        renderer::draw_mascot(ui, layout.mascot_rect());

        if !self.is_settled(now) {
            ui.ctx().request_repaint();
        }
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}
