// Card stack view: mounts the front cards of the visible queue with their
// stack transforms, wires drag and button input on the front card, and paints
// cards that are still animating out.

use std::collections::HashMap;

use eframe::egui;

use super::items::{draw_controls, layout_card, paint_card, CardStyle};
use crate::deck::DeckState;
use crate::types::{Card, CardId};
use crate::ui_constants::{spacing, STACK_MAX_HEIGHT, STACK_WIDTH};
use crate::views::empty_state::draw_empty_state;
use crate::views::motion::ExitAnimation;
use crate::views::stack::{mounted_count, paint_order, stack_transform, transformed_rect};

pub struct StackInput<'a> {
    pub deck: &'a DeckState,
    /// Horizontal offset of the front card (drag or spring-back).
    pub front_offset_x: f32,
    pub exiting: &'a [ExitAnimation],
    pub textures: &'a HashMap<CardId, egui::TextureHandle>,
    pub now: f64,
}

/// What the stack drew this frame and what the user did to it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StackOutput {
    /// Mounted cards, front first.
    pub mounted: Vec<CardId>,
    /// Card that received the Back / AI Insights buttons.
    pub controls_for: Option<CardId>,
    pub empty_state: bool,
    pub dragging: bool,
    pub drag_dx: f32,
    pub back_clicked: bool,
    pub toggle_expand: Option<CardId>,
}

pub fn draw_stack(ui: &mut egui::Ui, input: &StackInput) -> StackOutput {
    let mut out = StackOutput::default();
    let deck = input.deck;

    let avail = ui.available_rect_before_wrap();
    let width = STACK_WIDTH.min(avail.width() - 2.0 * spacing::LARGE).max(200.0);
    let area = egui::Rect::from_min_size(
        egui::pos2(avail.center().x - width / 2.0, avail.top() + spacing::XLARGE),
        egui::vec2(width, STACK_MAX_HEIGHT.min(avail.height())),
    );
    ui.allocate_rect(avail, egui::Sense::hover());
    let painter = ui.painter().clone();

    let total = deck.visible_len();
    let cards: Vec<&Card> = deck.visible().take(mounted_count(total)).collect();
    let expanded_index = cards.iter().position(|c| deck.is_expanded(*c.id()));
    out.mounted = cards.iter().map(|c| *c.id()).collect();

    for index in paint_order(total, expanded_index) {
        let card = cards[index];
        let expanded = expanded_index == Some(index);
        let t = stack_transform(index, total, expanded);
        let style = CardStyle {
            scale: t.scale,
            opacity: t.opacity,
            expanded,
        };
        let layout = layout_card(&painter, card, width * t.scale, &style);
        let base = egui::Rect::from_min_size(area.min, egui::vec2(width, layout.size.y / t.scale));
        let mut rect = transformed_rect(base, &t);

        let is_front = index == 0;
        if is_front {
            rect = rect.translate(egui::vec2(input.front_offset_x, 0.0));
        }
        let rects = paint_card(
            &painter,
            rect,
            layout,
            input.textures.get(card.id()),
            &style,
            !is_front,
        );
        if !is_front {
            continue;
        }

        // expanded cards stay put; only a collapsed front card can be dragged
        let sense = if expanded {
            egui::Sense::hover()
        } else {
            egui::Sense::drag()
        };
        let resp = ui.interact(rects.card, ui.id().with(("deck_front", card.id().get())), sense);
        out.dragging = resp.dragged();
        out.drag_dx = resp.drag_delta().x;
        if out.dragging {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if !expanded && resp.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        let clicks = draw_controls(ui, rects.controls, deck.can_restore(), expanded);
        out.back_clicked = clicks.back_clicked;
        if clicks.insight_clicked {
            out.toggle_expand = Some(*card.id());
        }
        out.controls_for = Some(*card.id());
    }

    for anim in input.exiting {
        let style = CardStyle {
            opacity: anim.opacity(input.now),
            ..CardStyle::front()
        };
        let layout = layout_card(&painter, &anim.card, width, &style);
        let rect = egui::Rect::from_min_size(area.min + egui::vec2(anim.offset_x(input.now), 0.0), layout.size);
        paint_card(&painter, rect, layout, input.textures.get(anim.card.id()), &style, true);
    }

    if total == 0 {
        draw_empty_state(ui, avail);
        out.empty_state = true;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckAction;
    use crate::types::SwipeDirection;

    fn deck_of(n: u64) -> DeckState {
        DeckState::new(
            (1..=n)
                .map(|i| Card::new(i, format!("Title {i}"), "body").with_insight("insight"))
                .collect(),
        )
        .unwrap()
    }

    fn render(deck: &DeckState, exiting: &[ExitAnimation]) -> StackOutput {
        let ctx = egui::Context::default();
        let textures = HashMap::new();
        let mut out = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                out = Some(draw_stack(
                    ui,
                    &StackInput {
                        deck,
                        front_offset_x: 0.0,
                        exiting,
                        textures: &textures,
                        now: 0.0,
                    },
                ));
            });
        });
        out.expect("stack was drawn")
    }

    #[test]
    fn mounts_at_most_four_cards_with_controls_on_front() {
        let out = render(&deck_of(6), &[]);
        let ids: Vec<u64> = out.mounted.iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(out.controls_for, Some(CardId::new(1)));
        assert!(!out.empty_state);
        assert!(!out.back_clicked);
        assert_eq!(out.toggle_expand, None);
    }

    #[test]
    fn expanded_front_keeps_its_controls() {
        let mut deck = deck_of(2);
        deck.apply(DeckAction::ToggleExpand(CardId::new(1)));
        let out = render(&deck, &[]);
        assert_eq!(out.controls_for, Some(CardId::new(1)));
        assert!(!out.dragging);
    }

    #[test]
    fn empty_deck_shows_message_without_card_controls() {
        let mut deck = deck_of(2);
        deck.apply(DeckAction::Dismiss(SwipeDirection::Left));
        deck.apply(DeckAction::Dismiss(SwipeDirection::Right));
        let out = render(&deck, &[]);
        assert!(out.empty_state);
        assert!(out.mounted.is_empty());
        assert_eq!(out.controls_for, None);
    }

    #[test]
    fn exiting_cards_do_not_count_as_mounted() {
        let mut deck = deck_of(1);
        let anim = match deck.apply(DeckAction::Dismiss(SwipeDirection::Right)) {
            crate::deck::Transition::Dismissed { card, direction } => {
                ExitAnimation::new(card, direction, 0.0, 0.0)
            }
            other => panic!("unexpected transition {other:?}"),
        };
        let out = render(&deck, &[anim]);
        assert!(out.empty_state);
        assert_eq!(out.controls_for, None);
    }
}
