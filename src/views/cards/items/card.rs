use std::sync::Arc;

use eframe::egui::{self, Color32, FontId, Galley, Rounding};

use super::controls::{paint_static_controls, ControlsLayout};
use super::header::{paint_header, HeaderText};
use super::insight::{layout_insight, paint_insight, InsightLayout};
use crate::types::Card;
use crate::ui_constants::{card as card_ui, spacing};
use crate::views::ui_helpers::paint_shadow;

/// Visual parameters of one mounted card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub scale: f32,
    pub opacity: f32,
    pub expanded: bool,
}

impl CardStyle {
    pub fn front() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
            expanded: false,
        }
    }

    pub fn fade(&self, c: Color32) -> Color32 {
        c.gamma_multiply(self.opacity)
    }

    pub fn px(&self, v: f32) -> f32 {
        v * self.scale
    }
}

/// Laid-out text of a card plus its total size at the style's scale.
pub struct CardLayout {
    header: HeaderText,
    date: Option<Arc<Galley>>,
    content: Arc<Galley>,
    insight: Option<InsightLayout>,
    controls: ControlsLayout,
    pub size: egui::Vec2,
}

pub fn layout_card(painter: &egui::Painter, card: &Card, width: f32, style: &CardStyle) -> CardLayout {
    let pad = style.px(card_ui::PADDING);
    let inner_w = (width - 2.0 * pad).max(1.0);

    let header = HeaderText::layout(painter, card, inner_w, style);

    let date = card.date().as_ref().map(|d| {
        painter.layout(
            d.clone(),
            FontId::proportional(style.px(13.0)),
            style.fade(Color32::from_gray(100)),
            inner_w,
        )
    });
    let content = painter.layout(
        card.content().clone(),
        FontId::proportional(style.px(14.0)),
        style.fade(Color32::from_gray(60)),
        inner_w,
    );
    let insight = if style.expanded {
        card.insight_text()
            .map(|text| layout_insight(painter, text, inner_w, style))
    } else {
        None
    };
    let controls = ControlsLayout::new(style.scale, style.expanded);

    let mut h = style.px(card_ui::HEADER_HEIGHT) + pad;
    if let Some(d) = &date {
        h += d.size().y + style.px(spacing::MEDIUM);
    }
    h += content.size().y;
    if let Some(ins) = &insight {
        h += ins.height();
    }
    h += style.px(spacing::LARGE) + controls.height + pad;

    CardLayout {
        header,
        date,
        content,
        insight,
        controls,
        size: egui::vec2(width, h),
    }
}

/// Where the interactive parts of a painted card ended up.
pub struct CardRects {
    pub card: egui::Rect,
    pub controls: egui::Rect,
}

/// Paints a card at `rect.min`. The controls row is only painted statically
/// when `static_controls` is set; the front card gets real buttons instead.
pub fn paint_card(
    painter: &egui::Painter,
    rect: egui::Rect,
    layout: CardLayout,
    cover: Option<&egui::TextureHandle>,
    style: &CardStyle,
    static_controls: bool,
) -> CardRects {
    let rounding = style.px(card_ui::ROUNDING);
    let pad = style.px(card_ui::PADDING);

    paint_shadow(painter, rect, rounding, style.opacity);
    painter.rect_filled(rect, Rounding::same(rounding), style.fade(Color32::WHITE));

    let header_rect = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), style.px(card_ui::HEADER_HEIGHT)));
    paint_header(painter, header_rect, layout.header, cover, style, rounding);

    let x = rect.left() + pad;
    let mut y = header_rect.bottom() + pad;

    if let Some(date) = layout.date {
        let h = date.size().y;
        painter.galley_with_override_text_color(egui::pos2(x, y), date, style.fade(Color32::from_gray(100)));
        y += h + style.px(spacing::MEDIUM);
    }

    let content_h = layout.content.size().y;
    painter.galley_with_override_text_color(
        egui::pos2(x, y),
        layout.content,
        style.fade(Color32::from_gray(60)),
    );
    y += content_h;

    if let Some(insight) = layout.insight {
        let inner = egui::Rect::from_min_max(egui::pos2(x, y), egui::pos2(rect.right() - pad, rect.bottom()));
        y += paint_insight(painter, inner, insight, style);
    }

    y += style.px(spacing::LARGE);
    let controls = egui::Rect::from_min_size(
        egui::pos2(x, y),
        egui::vec2(rect.width() - 2.0 * pad, layout.controls.height),
    );
    if static_controls {
        paint_static_controls(painter, controls, &layout.controls, style);
    }

    CardRects { card: rect, controls }
}
