use eframe::egui::{self, Color32, FontId, RichText, Rounding};

use super::card::CardStyle;
use crate::localization::translate;
use crate::ui_constants::card as card_ui;

const MUTED: Color32 = Color32::from_rgb(75, 85, 99);
const ACTIVE: Color32 = Color32::from_rgb(37, 99, 235);
const PILL_FILL: Color32 = Color32::from_rgb(249, 250, 251);
const PILL_FILL_ACTIVE: Color32 = Color32::from_rgb(254, 242, 242);

pub struct ControlsLayout {
    pub height: f32,
    expanded: bool,
}

impl ControlsLayout {
    pub fn new(scale: f32, expanded: bool) -> Self {
        Self {
            height: card_ui::CONTROLS_HEIGHT * scale,
            expanded,
        }
    }
}

fn back_label() -> String {
    format!("← {}", translate("card-back"))
}

fn insight_label(expanded: bool) -> String {
    format!("{} {}", translate("card-insights-toggle"), if expanded { "-" } else { "+" })
}

/// Buttons pressed on the front card this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ControlsOutput {
    pub back_clicked: bool,
    pub insight_clicked: bool,
}

/// Real "Back" / "AI Insights" buttons for the interactive card.
pub fn draw_controls(ui: &mut egui::Ui, rect: egui::Rect, can_restore: bool, expanded: bool) -> ControlsOutput {
    let mut out = ControlsOutput::default();
    ui.allocate_ui_at_rect(rect, |ui| {
        ui.horizontal_centered(|ui| {
            let back = egui::Button::new(RichText::new(back_label()).size(14.0).color(MUTED)).frame(false);
            if ui.add_enabled(can_restore, back).clicked() {
                out.back_clicked = true;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (fill, text_color) = if expanded {
                    (PILL_FILL_ACTIVE, ACTIVE)
                } else {
                    (PILL_FILL, MUTED)
                };
                let toggle = egui::Button::new(RichText::new(insight_label(expanded)).size(14.0).color(text_color))
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, Color32::from_black_alpha(26)))
                    .rounding(Rounding::same(card_ui::CONTROLS_HEIGHT / 2.0));
                if ui.add(toggle).clicked() {
                    out.insight_clicked = true;
                }
            });
        });
    });
    out
}

/// Inert copy of the controls row for cards further down the stack.
pub fn paint_static_controls(painter: &egui::Painter, rect: egui::Rect, layout: &ControlsLayout, style: &CardStyle) {
    let font = FontId::proportional(style.px(14.0));
    painter.text(
        rect.left_center(),
        egui::Align2::LEFT_CENTER,
        back_label(),
        font.clone(),
        style.fade(MUTED),
    );

    let label = painter.layout_no_wrap(insight_label(layout.expanded), font, style.fade(MUTED));
    let pad = egui::vec2(style.px(12.0), style.px(4.0));
    let size = label.size() + pad * 2.0;
    let pill = egui::Rect::from_min_size(
        egui::pos2(rect.right() - size.x, rect.center().y - size.y / 2.0),
        size,
    );
    painter.rect_filled(pill, Rounding::same(size.y / 2.0), style.fade(PILL_FILL));
    painter.galley_with_override_text_color(pill.min + pad, label, style.fade(MUTED));
}
