use eframe::egui::epaint::Mesh;
use eframe::egui::{self, Color32, Rounding, Stroke};

/// Fills `rect` with a top-to-bottom gradient.
pub fn paint_vertical_gradient(painter: &egui::Painter, rect: egui::Rect, top: Color32, bottom: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Soft drop shadow: a few stacked translucent rects growing outwards.
pub fn paint_shadow(painter: &egui::Painter, rect: egui::Rect, rounding: f32, opacity: f32) {
    for step in 1..=4 {
        let grow = step as f32 * 2.0;
        let alpha = (18.0 * opacity / step as f32) as u8;
        painter.rect_filled(
            rect.expand(grow).translate(egui::vec2(0.0, grow)),
            Rounding::same(rounding + grow),
            Color32::from_black_alpha(alpha),
        );
    }
}

/// Small rounded plaque with a pre-laid-out label.
pub fn paint_badge(
    painter: &egui::Painter,
    pos: egui::Pos2,
    galley: std::sync::Arc<egui::Galley>,
    pad: egui::Vec2,
    fill: Color32,
    text_color: Color32,
    rounding: f32,
) -> egui::Rect {
    let rect = egui::Rect::from_min_size(pos, galley.size() + pad * 2.0);
    painter.rect_filled(rect, Rounding::same(rounding), fill);
    painter.galley_with_override_text_color(rect.min + pad, galley, text_color);
    rect
}

/// Thin horizontal divider across `rect` at height `y`.
pub fn paint_divider(painter: &egui::Painter, rect: egui::Rect, y: f32, color: Color32) {
    painter.hline(rect.x_range(), y, Stroke::new(1.0, color));
}
