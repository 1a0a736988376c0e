//! # UI Module
//!
//! This module serves as the entry point for all UI functionality of the
//! subscription upsell app, re-exporting the components for easy access
//! throughout the codebase.
//!
//! ## Purpose:
//! Other modules can import everything they need with:
//! ```rust
//! use crate::ui::*;
//! ```
//!
//! ## Organization:
//! - `components` - All drawable components (chart, buttons, screen, theme)
//! - `app_state` - The application state struct and initialization
//! - `app_coordinator` - The eframe update loop

pub mod app_coordinator;
pub mod app_state;
pub mod components;

pub use app_state::*;
pub use components::*;
