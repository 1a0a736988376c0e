use eframe::egui;
use env_logger;
use log::{error, info};

mod app;
mod ui;

use app::SubscriptionUpsellApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting subscription upsell application");

    // Phone-portrait window shaped like the design
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 700.0])
            .with_min_inner_size([320.0, 568.0]) // Smallest phone shape that still fits the chart
            .with_max_inner_size([500.0, 1000.0])
            .with_title("Premium")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Subscription Upsell",
        options,
        Box::new(|cc| {
            // Enable persistence for window state
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match SubscriptionUpsellApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized upsell screen");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe's creator error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
