use std::sync::Arc;

use eframe::egui::{self, Color32, FontId, Galley, Rounding};

use super::card::CardStyle;
use crate::types::Card;
use crate::ui_constants::{card as card_ui, spacing};
use crate::views::ui_helpers::{paint_badge, paint_vertical_gradient};

pub struct HeaderText {
    title: Arc<Galley>,
    source: Option<Arc<Galley>>,
}

impl HeaderText {
    pub fn layout(painter: &egui::Painter, card: &Card, inner_w: f32, style: &CardStyle) -> Self {
        let title = painter.layout(
            card.title().clone(),
            FontId::proportional(style.px(20.0)),
            Color32::WHITE,
            inner_w,
        );
        let source = card.source().as_ref().map(|s| {
            painter.layout_no_wrap(s.clone(), FontId::proportional(style.px(11.0)), Color32::WHITE)
        });
        Self { title, source }
    }
}

/// Header area: picture (or dark placeholder), bottom shade, source badge and title.
pub fn paint_header(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: HeaderText,
    cover: Option<&egui::TextureHandle>,
    style: &CardStyle,
    rounding: f32,
) {
    let clip = painter.with_clip_rect(rect.intersect(painter.clip_rect()));

    match cover {
        Some(tex) => {
            let uv = cover_uv(tex.size_vec2(), rect.size());
            clip.image(tex.id(), rect, uv, style.fade(Color32::WHITE));
        }
        None => {
            let top_rounding = Rounding {
                nw: rounding,
                ne: rounding,
                sw: 0.0,
                se: 0.0,
            };
            clip.rect_filled(rect, top_rounding, style.fade(Color32::from_black_alpha(153)));
            paint_vertical_gradient(
                &clip,
                rect,
                style.fade(Color32::from_black_alpha(153)),
                style.fade(Color32::from_black_alpha(230)),
            );
        }
    }

    // shade from transparent to black so the title stays readable over any picture
    paint_vertical_gradient(
        &clip,
        rect,
        Color32::TRANSPARENT,
        style.fade(Color32::from_black_alpha(240)),
    );

    let inset = style.px(spacing::LARGE);
    if let Some(source) = text.source {
        paint_badge(
            &clip,
            rect.min + egui::vec2(inset, inset),
            source,
            egui::vec2(style.px(spacing::MEDIUM), style.px(spacing::SMALL)),
            style.fade(Color32::from_rgb(31, 41, 55)),
            style.fade(Color32::WHITE),
            style.px(card_ui::BADGE_ROUNDING),
        );
    }

    let title_h = text.title.size().y;
    let title_pos = egui::pos2(rect.left() + inset, rect.bottom() - style.px(spacing::XLARGE) - title_h);
    clip.galley_with_override_text_color(title_pos, text.title, style.fade(Color32::WHITE));
}

/// UV rect that crops the texture to cover `target` while keeping its aspect ratio.
fn cover_uv(tex_size: egui::Vec2, target: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let tex_aspect = tex_size.x / tex_size.y;
    let target_aspect = target.x / target.y;
    if tex_aspect > target_aspect {
        let w = target_aspect / tex_aspect;
        egui::Rect::from_min_max(egui::pos2((1.0 - w) / 2.0, 0.0), egui::pos2((1.0 + w) / 2.0, 1.0))
    } else {
        let h = tex_aspect / target_aspect;
        egui::Rect::from_min_max(egui::pos2(0.0, (1.0 - h) / 2.0), egui::pos2(1.0, (1.0 + h) / 2.0))
    }
}
