//! # App State Module
//!
//! Central application state for the subscription upsell window.
//!
//! ## Key Types:
//! - `SubscriptionUpsellApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize the app instance (image loaders, screen)
//!
//! ## Purpose:
//! The app owns exactly one piece of state: the upsell screen. Everything
//! else (animation, callbacks) lives inside the screen itself, so this
//! struct is the single place the window's lifecycle touches.

use log::info;

use crate::ui::components::subscription_screen::SubscriptionScreen;

/// Main application struct for the upsell window
pub struct SubscriptionUpsellApp {
    /// The one screen this app presents
    pub screen: SubscriptionScreen,
}

impl SubscriptionUpsellApp {
    /// Initialize the app: install image loaders for the mascot asset and
    /// build the screen with its logging default actions.
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        info!("🖼️ Image loaders installed");

        Ok(Self {
            screen: SubscriptionScreen::new(),
        })
    }
}
