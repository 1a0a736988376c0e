//! # App Coordinator Module
//!
//! The main application update loop (implements `eframe::App`).
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Style setup, global input, screen rendering
//!
//! ## Application Flow:
//! 1. Set up the upsell styling
//! 2. Handle global input (ESC acts like the close control)
//! 3. Render the screen in a frameless central panel so the painted
//!    gradient background runs edge to edge

use eframe::egui;

use crate::ui::app_state::SubscriptionUpsellApp;
use crate::ui::*;

impl eframe::App for SubscriptionUpsellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_upsell_style(ctx);

        // ESC behaves like tapping the close control.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.screen.request_close();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.screen.show(ui);
            });
    }
}
