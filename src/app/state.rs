// Animation state kept next to the deck: the live drag, a pending
// spring-back and cards still sliding out.

use crate::types::{Card, CardId, SwipeDirection};
use crate::views::motion::{DragTracker, ExitAnimation, SpringBack};

#[derive(Default)]
pub struct MotionState {
    pub drag: DragTracker,
    pub spring: Option<SpringBack>,
    exiting: Vec<ExitAnimation>,
}

impl MotionState {
    pub fn front_offset_x(&self, now: f64) -> f32 {
        if self.drag.is_active() {
            return self.drag.offset_x();
        }
        self.spring.map(|s| s.offset_x(now)).unwrap_or(0.0)
    }

    pub fn start_exit(&mut self, card: Card, direction: SwipeDirection, from_x: f32, now: f64) {
        self.spring = None;
        self.exiting.push(ExitAnimation::new(card, direction, from_x, now));
    }

    /// A restored card must not keep animating out.
    pub fn cancel_exit(&mut self, id: CardId) {
        self.exiting.retain(|a| *a.card.id() != id);
    }

    pub fn exiting(&self) -> &[ExitAnimation] {
        &self.exiting
    }

    /// Drops finished animations.
    pub fn prune(&mut self, now: f64) {
        self.exiting.retain(|a| !a.is_finished(now));
        if self.spring.is_some_and(|s| s.is_finished(now)) {
            self.spring = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.drag.is_active() || self.spring.is_some() || !self.exiting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_constants::motion::DURATION;

    #[test]
    fn exits_are_pruned_when_done() {
        let mut m = MotionState::default();
        m.start_exit(Card::new(1, "a", "a"), SwipeDirection::Right, 120.0, 0.0);
        m.start_exit(Card::new(2, "b", "b"), SwipeDirection::Left, -120.0, 0.2);
        m.prune(DURATION + 0.01);
        let left: Vec<u64> = m.exiting().iter().map(|a| a.card.id().get()).collect();
        assert_eq!(left, vec![2]);
        m.prune(10.0);
        assert!(!m.is_animating());
    }

    #[test]
    fn cancel_exit_removes_restored_card() {
        let mut m = MotionState::default();
        m.start_exit(Card::new(1, "a", "a"), SwipeDirection::Right, 0.0, 0.0);
        m.cancel_exit(CardId::new(1));
        assert!(m.exiting().is_empty());
    }

    #[test]
    fn spring_drives_front_offset_until_finished() {
        let mut m = MotionState::default();
        m.spring = Some(SpringBack::new(50.0, 0.0));
        assert_eq!(m.front_offset_x(0.0), 50.0);
        m.prune(DURATION);
        assert!(m.spring.is_none());
        assert_eq!(m.front_offset_x(DURATION), 0.0);
    }
}
