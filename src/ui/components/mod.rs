//! # UI Components Module
//!
//! This module organizes all UI components for the subscription upsell
//! screen. Each submodule handles a specific aspect of the interface.
//!
//! ## Module Organization:
//! - `theme` - Color palette and theme constants
//! - `styling` - Global style setup, gradient meshes, gradient text, shadows
//! - `rounded_corners` - Per-corner rounded rectangle outlines
//! - `bar_chart` - Animated projection chart with labels and mascot
//! - `close_button` - Circular dismiss control
//! - `plan_button` - Pill-shaped call to action
//! - `subscription_screen` - The composite full-screen view
//!
//! ## Architecture:
//! Leaves first: geometry and styling helpers are pure functions, the chart
//! owns the only time-based state, and the screen is plain composition.

pub mod bar_chart;
pub mod close_button;
pub mod plan_button;
pub mod rounded_corners;
pub mod styling;
pub mod subscription_screen;
pub mod theme;

pub use bar_chart::{BarChart, BarDatum};
pub use close_button::CloseButton;
pub use plan_button::PlanButton;
pub use rounded_corners::{rounded_rect_path, Corners};
pub use styling::{draw_gradient_text, draw_vertical_gradient, setup_upsell_style};
pub use subscription_screen::SubscriptionScreen;
pub use theme::*;
