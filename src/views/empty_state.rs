use eframe::egui::{self, Color32, RichText};

use crate::localization::translate;

/// Shown once every card has been dismissed. No controls.
pub fn draw_empty_state(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.allocate_ui_at_rect(rect, |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(translate("empty-state")).size(20.0).color(Color32::BLACK));
        });
    });
}
