//! # Styling Module
//!
//! Drawing helpers shared across the upsell screen components.
//!
//! ## Key Functions:
//! - `setup_upsell_style()` - Configure global egui styling for the screen
//! - `draw_vertical_gradient()` - Fill a rect with a two-stop vertical gradient
//! - `draw_convex_polygon_vertical_gradient()` - Gradient-fill an outline
//!   (used for the rounded-top chart bars)
//! - `draw_gradient_text()` - Text masked by a vertical gradient
//! - `draw_drop_shadow()` - Offset translucent shadow behind a shape
//!
//! ## Gradients:
//! egui fills are single-color, so gradients are built as meshes with
//! per-vertex colors and left to the GPU to interpolate. Gradient text has no
//! native mask primitive either; the glyph galley is laid out once and then
//! repainted through thin clip strips, each strip tinted with the gradient
//! color at its height.

use eframe::egui;
use egui::Color32;

use crate::ui::components::theme::lerp_color;

/// Setup global styling for the upsell screen.
///
/// Panels are made transparent so the painted background gradient shows
/// through, and widget corners get a soft rounding consistent with the
/// screen's pill shapes.
pub fn setup_upsell_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.window_fill = Color32::TRANSPARENT;
        style.visuals.panel_fill = Color32::TRANSPARENT;
        style.visuals.button_frame = true;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(28.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Build a mesh filling `rect` with a vertical gradient from `top` to
/// `bottom`.
pub fn vertical_gradient_mesh(rect: egui::Rect, top: Color32, bottom: Color32) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

/// Fill `rect` with a vertical gradient from `top` to `bottom`.
pub fn draw_vertical_gradient(painter: &egui::Painter, rect: egui::Rect, top: Color32, bottom: Color32) {
    if !rect.is_positive() {
        return;
    }
    painter.add(egui::Shape::mesh(vertical_gradient_mesh(rect, top, bottom)));
}

/// Build a fan mesh for a convex outline, with each vertex tinted by the
/// vertical gradient position of its `y` within `bounds`.
pub fn convex_polygon_gradient_mesh(
    points: &[egui::Pos2],
    bounds: egui::Rect,
    top: Color32,
    bottom: Color32,
) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    if points.len() < 3 {
        return mesh;
    }

    let height = bounds.height().max(f32::EPSILON);
    for point in points {
        let t = ((point.y - bounds.top()) / height).clamp(0.0, 1.0);
        mesh.colored_vertex(*point, lerp_color(top, bottom, t));
    }
    for i in 1..points.len() as u32 - 1 {
        mesh.add_triangle(0, i, i + 1);
    }
    mesh
}

/// Gradient-fill a convex outline (clockwise or counter-clockwise).
pub fn draw_convex_polygon_vertical_gradient(
    painter: &egui::Painter,
    points: &[egui::Pos2],
    bounds: egui::Rect,
    top: Color32,
    bottom: Color32,
) {
    let mesh = convex_polygon_gradient_mesh(points, bounds, top, bottom);
    if !mesh.is_empty() {
        painter.add(egui::Shape::mesh(mesh));
    }
}

/// Draw `text` centered in `rect`, masked by a vertical gradient.
///
/// The galley is laid out once with a placeholder color and repainted through
/// ~2 px clip strips, each tinted by the gradient color at that height. Only
/// glyph pixels show color, which reads as gradient-filled text.
pub fn draw_gradient_text(
    ui: &egui::Ui,
    rect: egui::Rect,
    text: &str,
    font_size: f32,
    top: Color32,
    bottom: Color32,
) {
    if !rect.is_positive() || text.is_empty() {
        return;
    }

    let font = egui::FontId::new(font_size, egui::FontFamily::Proportional);
    let galley = ui.fonts(|fonts| fonts.layout_no_wrap(text.to_owned(), font, Color32::PLACEHOLDER));
    let text_pos = rect.center() - galley.size() / 2.0;

    let num_strips = ((rect.height() / 2.0).ceil() as usize).clamp(1, 64);
    let strip_height = rect.height() / num_strips as f32;
    for i in 0..num_strips {
        let strip_top = rect.top() + strip_height * i as f32;
        let strip = egui::Rect::from_min_size(
            egui::pos2(rect.left(), strip_top),
            egui::vec2(rect.width(), strip_height),
        );
        let t = (strip_top + strip_height / 2.0 - rect.top()) / rect.height();
        let color = lerp_color(top, bottom, t);
        ui.painter().with_clip_rect(strip).galley(text_pos, galley.clone(), color);
    }
}

/// Draw an offset translucent shadow behind a rounded rect.
pub fn draw_drop_shadow(
    painter: &egui::Painter,
    rect: egui::Rect,
    rounding: egui::Rounding,
    offset: egui::Vec2,
    color: Color32,
) {
    painter.rect_filled(rect.translate(offset), rounding, color);
}
