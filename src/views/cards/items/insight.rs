use std::sync::Arc;

use eframe::egui::{self, Color32, FontId, Galley};

use super::card::CardStyle;
use crate::localization::translate;
use crate::ui_constants::spacing;
use crate::views::ui_helpers::paint_divider;

/// Expanded "AI Insights" section below the card text.
pub struct InsightLayout {
    heading: Arc<Galley>,
    text: Arc<Galley>,
    gap_large: f32,
    gap_medium: f32,
}

impl InsightLayout {
    pub fn height(&self) -> f32 {
        2.0 * self.gap_large + self.heading.size().y + self.gap_medium + self.text.size().y
    }
}

pub fn layout_insight(painter: &egui::Painter, text: &str, inner_w: f32, style: &CardStyle) -> InsightLayout {
    let heading = painter.layout(
        translate("card-insights-heading"),
        FontId::proportional(style.px(16.0)),
        style.fade(Color32::from_gray(31)),
        inner_w,
    );
    let text = painter.layout(
        text.to_string(),
        FontId::proportional(style.px(14.0)),
        style.fade(Color32::from_gray(60)),
        inner_w,
    );
    InsightLayout {
        heading,
        text,
        gap_large: style.px(spacing::LARGE),
        gap_medium: style.px(spacing::MEDIUM),
    }
}

/// Paints the section at the top of `rect`; returns the height used.
pub fn paint_insight(painter: &egui::Painter, rect: egui::Rect, layout: InsightLayout, style: &CardStyle) -> f32 {
    let height = layout.height();
    let mut y = rect.top() + layout.gap_large;
    paint_divider(painter, rect, y, style.fade(Color32::from_gray(229)));
    y += layout.gap_large;

    let heading_h = layout.heading.size().y;
    painter.galley_with_override_text_color(
        egui::pos2(rect.left(), y),
        layout.heading,
        style.fade(Color32::from_gray(31)),
    );
    y += heading_h + layout.gap_medium;

    painter.galley_with_override_text_color(
        egui::pos2(rect.left(), y),
        layout.text,
        style.fade(Color32::from_gray(60)),
    );
    height
}
