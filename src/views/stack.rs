// Position-dependent look of the mounted cards: scale, opacity, vertical
// offset and paint order. Pure functions so the layout can be tested without a UI.

use eframe::egui;

use crate::ui_constants::{stack, MAX_RENDERED_CARDS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackTransform {
    pub scale: f32,
    pub opacity: f32,
    pub offset_y: f32,
    /// Higher is painted later (on top).
    pub z: usize,
}

const EXPANDED_Z: usize = 50;

/// Number of cards mounted for a queue of `len` cards.
pub fn mounted_count(len: usize) -> usize {
    len.min(MAX_RENDERED_CARDS)
}

/// Look of the card at stack position `index` in a queue of `total` cards.
pub fn stack_transform(index: usize, total: usize, expanded: bool) -> StackTransform {
    if expanded {
        return StackTransform {
            scale: 1.0,
            opacity: 1.0,
            offset_y: 0.0,
            z: EXPANDED_Z,
        };
    }
    let i = index as f32;
    StackTransform {
        scale: (1.0 - i * stack::SCALE_STEP).max(0.0),
        opacity: (1.0 - i * stack::OPACITY_STEP).clamp(0.0, 1.0),
        offset_y: i * stack::CARD_OFFSET,
        z: total.saturating_sub(index),
    }
}

/// Applies a transform to an unscaled card rect: scaled about its centre, then shifted down.
pub fn transformed_rect(base: egui::Rect, t: &StackTransform) -> egui::Rect {
    let size = base.size() * t.scale;
    let rect = egui::Rect::from_center_size(base.center(), size);
    rect.translate(egui::vec2(0.0, t.offset_y))
}

/// Mounted positions in paint order (back to front).
pub fn paint_order(total: usize, expanded_index: Option<usize>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..mounted_count(total)).collect();
    order.sort_by_key(|&i| stack_transform(i, total, Some(i) == expanded_index).z);
    order
}
