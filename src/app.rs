// Application shell: owns the deck and its animation state, draws the stack
// each frame and turns stack input into deck actions.

use eframe::{egui, App};

use crate::deck::feed::load_initial_deck;
use crate::deck::{DeckAction, DeckState, Transition};
use crate::localization::{translate, translate_with};
use crate::views::cards::{draw_stack, StackInput, StackOutput};
use crate::views::motion::SpringBack;

mod fonts;
mod images;
mod logs_ui;
pub mod settings;
mod state;

use images::ImageCache;
use state::MotionState;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);

pub struct SwipeApp {
    deck: DeckState,
    motion: MotionState,
    images: ImageCache,
}

impl SwipeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let (feed_path, threshold, cjk_font) = settings::with_settings(|s| {
            (s.feed_path.clone(), s.swipe_threshold, s.cjk_font.clone())
        });
        fonts::install_fonts(&cc.egui_ctx, cjk_font.as_deref());
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_deck(load_initial_deck(feed_path.as_deref(), threshold))
    }

    pub fn with_deck(deck: DeckState) -> Self {
        Self {
            deck,
            motion: MotionState::default(),
            images: ImageCache::default(),
        }
    }

    /// Runs one action through the deck and starts the matching animation.
    fn dispatch(&mut self, action: DeckAction, release_offset_x: f32, now: f64) -> Transition {
        let policy = settings::with_settings(|s| s.exit_policy);
        let transition = self.deck.apply(action);
        match &transition {
            Transition::Dismissed { card, direction } => {
                let exit = policy.exit_direction(card, *direction);
                log::info!("Dismissed card {} (swiped {}, exits {})", card.id(), direction, exit);
                self.motion.start_exit(card.clone(), exit, release_offset_x, now);
            }
            Transition::Restored { card } => {
                log::info!("Restored card {}", card.id());
                self.motion.cancel_exit(*card.id());
            }
            Transition::ExpandChanged { expanded } => {
                log::debug!("Expanded card: {:?}", expanded.map(|id| id.get()));
            }
            Transition::Unchanged => {}
        }
        transition
    }

    fn handle_stack_output(&mut self, out: &StackOutput, now: f64) {
        if out.dragging {
            self.motion.spring = None;
        }
        if let Some(release) = self.motion.drag.update(out.dragging, out.drag_dx) {
            let action = DeckAction::DragRelease {
                offset_x: release.pointer_x,
            };
            let t = self.dispatch(action, release.card_x, now);
            if t.is_unchanged() && release.card_x != 0.0 {
                self.motion.spring = Some(SpringBack::new(release.card_x, now));
            }
        }
        if out.back_clicked {
            self.motion.drag.reset();
            self.dispatch(DeckAction::Restore, 0.0, now);
        }
        if let Some(id) = out.toggle_expand {
            self.dispatch(DeckAction::ToggleExpand(id), 0.0, now);
        }
    }

    fn sync_settings(&mut self) {
        let threshold = settings::with_settings(|s| s.swipe_threshold);
        if threshold != self.deck.swipe_threshold() {
            self.deck.set_swipe_threshold(threshold);
        }
    }

    fn draw_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(translate_with(
                    "deck-counter",
                    &[
                        ("visible", self.deck.visible_len().to_string()),
                        ("dismissed", self.deck.undo_len().to_string()),
                    ],
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(translate("menu-logs")).clicked() {
                        logs_ui::open_logs();
                        ctx.request_repaint();
                    }
                    if ui.button(translate("menu-settings")).clicked() {
                        settings::open_settings();
                        ctx.request_repaint();
                    }
                });
            });
        });
    }
}

impl App for SwipeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if crate::logger::take_new_flag() && logs_ui::is_open() {
            ctx.request_repaint();
        }
        self.sync_settings();

        let now = ctx.input(|i| i.time);
        self.motion.prune(now);

        let assets_dir = settings::with_settings(|s| s.assets_dir.clone());
        for card in self.deck.visible().take(crate::ui_constants::MAX_RENDERED_CARDS) {
            self.images.ensure(ctx, card, &assets_dir);
        }

        self.draw_top_bar(ctx);

        let out = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                draw_stack(
                    ui,
                    &StackInput {
                        deck: &self.deck,
                        front_offset_x: self.motion.front_offset_x(now),
                        exiting: self.motion.exiting(),
                        textures: self.images.textures(),
                        now,
                    },
                )
            })
            .inner;
        self.handle_stack_output(&out, now);

        if self.motion.is_animating() {
            ctx.request_repaint();
        }

        logs_ui::draw_logs_viewport(ctx);
        settings::draw_settings_viewport(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, CardId, SwipeDirection};

    fn app() -> SwipeApp {
        let deck = DeckState::new(vec![
            Card::new(1, "A", "a"),
            Card::new(2, "B", "b"),
            Card::new(3, "C", "c"),
        ])
        .unwrap();
        SwipeApp::with_deck(deck)
    }

    fn drag_frame(dx: f32) -> StackOutput {
        StackOutput {
            dragging: true,
            drag_dx: dx,
            ..StackOutput::default()
        }
    }

    #[test]
    fn long_drag_dismisses_and_animates_out() {
        let mut app = app();
        app.handle_stack_output(&drag_frame(100.0), 0.0);
        app.handle_stack_output(&drag_frame(100.0), 0.016);
        app.handle_stack_output(&StackOutput::default(), 0.032);

        assert_eq!(app.deck.visible_len(), 2);
        assert_eq!(app.deck.undo_len(), 1);
        let exiting = app.motion.exiting();
        assert_eq!(exiting.len(), 1);
        assert_eq!(exiting[0].card.id().get(), 1);
        assert_eq!(exiting[0].direction, SwipeDirection::Right);
        assert!(app.motion.spring.is_none());
    }

    #[test]
    fn short_drag_springs_back() {
        let mut app = app();
        app.handle_stack_output(&drag_frame(-50.0), 0.0);
        app.handle_stack_output(&StackOutput::default(), 0.016);

        assert_eq!(app.deck.visible_len(), 3);
        assert!(app.motion.exiting().is_empty());
        assert!(app.motion.spring.is_some());
        assert!(app.motion.front_offset_x(0.016) < 0.0);
    }

    #[test]
    fn pointer_travel_over_threshold_dismisses() {
        let mut app = app();
        app.handle_stack_output(&drag_frame(130.0), 0.0);
        app.handle_stack_output(&StackOutput::default(), 0.016);
        assert_eq!(app.deck.visible_len(), 2);
        let exiting = app.motion.exiting();
        assert_eq!(exiting.len(), 1);
        // tween starts where the card was drawn
        assert!((exiting[0].offset_x(0.016) - 91.0).abs() < 1e-3);
    }

    #[test]
    fn pointer_travel_under_threshold_springs_back() {
        let mut app = app();
        app.handle_stack_output(&drag_frame(90.0), 0.0);
        app.handle_stack_output(&StackOutput::default(), 0.016);
        assert_eq!(app.deck.visible_len(), 3);
        assert!(app.motion.exiting().is_empty());
        let spring = app.motion.spring.expect("spring-back started");
        assert!((spring.offset_x(0.016) - 63.0).abs() < 1e-3);
    }

    #[test]
    fn last_frame_delta_counts_towards_swipe() {
        let mut app = app();
        app.handle_stack_output(&drag_frame(-60.0), 0.0);
        app.handle_stack_output(
            &StackOutput {
                drag_dx: -50.0,
                ..StackOutput::default()
            },
            0.016,
        );
        assert_eq!(app.deck.visible_len(), 2);
        assert_eq!(app.motion.exiting()[0].direction, SwipeDirection::Left);
    }

    #[test]
    fn back_restores_and_stops_exit_animation() {
        let mut app = app();
        app.dispatch(DeckAction::Dismiss(SwipeDirection::Left), -150.0, 0.0);
        assert_eq!(app.motion.exiting().len(), 1);

        let out = StackOutput {
            back_clicked: true,
            ..StackOutput::default()
        };
        app.handle_stack_output(&out, 0.1);
        assert_eq!(app.deck.visible_len(), 3);
        assert_eq!(app.deck.front().map(|c| c.id().get()), Some(1));
        assert!(app.motion.exiting().is_empty());
    }

    #[test]
    fn insight_toggle_reaches_deck() {
        let mut app = app();
        let out = StackOutput {
            toggle_expand: Some(CardId::new(1)),
            ..StackOutput::default()
        };
        app.handle_stack_output(&out, 0.0);
        assert_eq!(app.deck.expanded(), Some(CardId::new(1)));
        app.handle_stack_output(&out, 0.1);
        assert_eq!(app.deck.expanded(), None);
    }
}
