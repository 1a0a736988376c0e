//! # App Module
//!
//! Re-export hub for the application type, so the binary entry point can
//! simply `use app::SubscriptionUpsellApp`.

pub use crate::ui::app_state::SubscriptionUpsellApp;
