//! # Theme Configuration
//!
//! This module provides centralized color configuration for the subscription
//! upsell screen. All visual styling should use these constants to ensure
//! consistency and easy theme management.
//!
//! The concrete palette stands in for the branding assets a host app would
//! normally supply; everything else in the crate refers to colors through
//! this module only, so swapping the palette is a one-file change.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::{CURRENT_THEME, colors};
//!
//! let fill = CURRENT_THEME.button.plan_fill;
//! let text = colors::TEXT_PRIMARY;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Full-screen background gradient colors
    pub background: BackgroundColors,
    /// Bar chart colors (bar gradient, labels)
    pub chart: ChartColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Button colors (close control, call-to-action)
    pub button: ButtonColors,
}

/// Colors for the screen-wide vertical background gradient
#[derive(Debug, Clone)]
pub struct BackgroundColors {
    /// Accent color at the top of the screen
    pub gradient_top: Color32,
    /// Color the gradient fades into at the bottom
    pub gradient_bottom: Color32,
}

/// Colors used by the bar chart
#[derive(Debug, Clone)]
pub struct ChartColors {
    /// Bar fill at the top edge of each bar
    pub bar_gradient_top: Color32,
    /// Bar fill at the baseline of each bar
    pub bar_gradient_bottom: Color32,
    /// Label text under each bar
    pub label: Color32,
}

/// Text colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (titles, captions)
    pub primary: Color32,
    /// White text (for colored backgrounds)
    pub white: Color32,
}

/// Button colors
#[derive(Debug, Clone)]
pub struct ButtonColors {
    /// Call-to-action pill fill
    pub plan_fill: Color32,
    /// Call-to-action pill fill while hovered
    pub plan_fill_hover: Color32,
    /// Outline stroke around the call-to-action pill
    pub plan_outline: Color32,
    /// Close control circle fill
    pub close_fill: Color32,
    /// Close control circle fill while hovered
    pub close_fill_hover: Color32,
    /// Shadow color shared by both buttons (15% black)
    pub shadow: Color32,
}

/// The current active theme - light blue "sky" palette
pub const CURRENT_THEME: Theme = Theme {
    background: BackgroundColors {
        gradient_top: Color32::from_rgb(213, 241, 255),
        gradient_bottom: Color32::WHITE,
    },
    chart: ChartColors {
        bar_gradient_top: Color32::from_rgb(58, 134, 255),
        bar_gradient_bottom: Color32::from_rgb(132, 215, 255),
        label: Color32::from_rgb(30, 30, 30),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(30, 30, 30),
        white: Color32::WHITE,
    },
    button: ButtonColors {
        plan_fill: Color32::from_rgb(48, 105, 245),
        plan_fill_hover: Color32::from_rgb(72, 125, 250),
        plan_outline: Color32::WHITE,
        close_fill: Color32::WHITE,
        close_fill_hover: Color32::from_rgb(244, 246, 250),
        shadow: Color32::from_rgba_premultiplied(0, 0, 0, 38),
    },
};

/// Linear interpolation between two colors in 8-bit channel space.
///
/// `t` is clamped to `[0, 1]`; `t = 0` yields `a`, `t = 1` yields `b`.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    // Background gradient
    pub const BACKGROUND_TOP: Color32 = CURRENT_THEME.background.gradient_top;
    pub const BACKGROUND_BOTTOM: Color32 = CURRENT_THEME.background.gradient_bottom;

    // Bar chart
    pub const BAR_GRADIENT_TOP: Color32 = CURRENT_THEME.chart.bar_gradient_top;
    pub const BAR_GRADIENT_BOTTOM: Color32 = CURRENT_THEME.chart.bar_gradient_bottom;
    pub const BAR_LABEL: Color32 = CURRENT_THEME.chart.label;

    // Typography
    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    // Buttons
    pub const PLAN_FILL: Color32 = CURRENT_THEME.button.plan_fill;
    pub const PLAN_FILL_HOVER: Color32 = CURRENT_THEME.button.plan_fill_hover;
    pub const PLAN_OUTLINE: Color32 = CURRENT_THEME.button.plan_outline;
    pub const CLOSE_FILL: Color32 = CURRENT_THEME.button.close_fill;
    pub const CLOSE_FILL_HOVER: Color32 = CURRENT_THEME.button.close_fill_hover;
    pub const BUTTON_SHADOW: Color32 = CURRENT_THEME.button.shadow;
}
