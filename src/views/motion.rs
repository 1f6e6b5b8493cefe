// Drag tracking plus the exit and spring-back tweens for the front card.
// Times are egui input seconds (`InputState::time`).

use crate::types::{Card, SwipeDirection};
use crate::ui_constants::motion::{DRAG_ELASTIC, DURATION, EXIT_DISTANCE};

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn progress(started_at: f64, now: f64) -> f32 {
    (((now - started_at) / DURATION) as f32).clamp(0.0, 1.0)
}

/// Horizontal drag of the front card. The card follows the pointer with
/// elasticity; the swipe decision uses the raw pointer travel.
#[derive(Debug, Default, Clone)]
pub struct DragTracker {
    offset_x: f32,
    pointer_offset_x: f32,
    active: bool,
}

/// Offsets at the moment the pointer let go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Pointer travel since the drag started; compared against the swipe threshold.
    pub pointer_x: f32,
    /// Where the card was drawn; exit and spring-back tweens start here.
    pub card_x: f32,
}

impl DragTracker {
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn pointer_offset_x(&self) -> f32 {
        self.pointer_offset_x
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one frame of input. Returns the release on the frame the drag ends;
    /// that frame's pointer delta still counts.
    pub fn update(&mut self, dragging: bool, pointer_dx: f32) -> Option<DragRelease> {
        if !dragging && !self.active {
            return None;
        }
        self.active = true;
        self.pointer_offset_x += pointer_dx;
        self.offset_x = self.pointer_offset_x * DRAG_ELASTIC;
        if dragging {
            return None;
        }
        let release = DragRelease {
            pointer_x: self.pointer_offset_x,
            card_x: self.offset_x,
        };
        self.reset();
        Some(release)
    }

    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.pointer_offset_x = 0.0;
        self.active = false;
    }
}

/// A dismissed card sliding off to one side while fading out.
#[derive(Debug, Clone)]
pub struct ExitAnimation {
    pub card: Card,
    pub direction: SwipeDirection,
    start_offset_x: f32,
    started_at: f64,
}

impl ExitAnimation {
    pub fn new(card: Card, direction: SwipeDirection, start_offset_x: f32, started_at: f64) -> Self {
        Self {
            card,
            direction,
            start_offset_x,
            started_at,
        }
    }

    pub fn offset_x(&self, now: f64) -> f32 {
        let t = ease_out_cubic(progress(self.started_at, now));
        let target = self.direction.sign() * EXIT_DISTANCE;
        self.start_offset_x + (target - self.start_offset_x) * t
    }

    pub fn opacity(&self, now: f64) -> f32 {
        1.0 - ease_out_cubic(progress(self.started_at, now))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        progress(self.started_at, now) >= 1.0
    }
}

/// A released card easing back to its resting position.
#[derive(Debug, Clone, Copy)]
pub struct SpringBack {
    from_x: f32,
    started_at: f64,
}

impl SpringBack {
    pub fn new(from_x: f32, started_at: f64) -> Self {
        Self { from_x, started_at }
    }

    pub fn offset_x(&self, now: f64) -> f32 {
        self.from_x * (1.0 - ease_out_cubic(progress(self.started_at, now)))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        progress(self.started_at, now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_is_clamped() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn drag_reports_release_once() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.update(false, 0.0), None);
        assert_eq!(drag.update(true, 100.0), None);
        assert_eq!(drag.update(true, 100.0), None);
        assert!(drag.is_active());
        assert!((drag.offset_x() - 140.0).abs() < 1e-4);
        assert_eq!(drag.pointer_offset_x(), 200.0);
        let released = drag.update(false, 0.0).unwrap();
        assert_eq!(released.pointer_x, 200.0);
        assert!((released.card_x - 140.0).abs() < 1e-4);
        assert_eq!(drag.offset_x(), 0.0);
        assert_eq!(drag.update(false, 0.0), None);
    }

    #[test]
    fn release_frame_delta_is_counted() {
        let mut drag = DragTracker::default();
        drag.update(true, 60.0);
        let released = drag.update(false, 50.0).unwrap();
        assert_eq!(released.pointer_x, 110.0);
        assert!((released.card_x - 77.0).abs() < 1e-4);
        assert_eq!(drag.pointer_offset_x(), 0.0);
    }

    #[test]
    fn exit_moves_towards_direction_and_fades() {
        let card = Card::new(1, "t", "c");
        let anim = ExitAnimation::new(card, SwipeDirection::Left, -120.0, 10.0);
        assert_eq!(anim.offset_x(10.0), -120.0);
        assert_eq!(anim.opacity(10.0), 1.0);
        assert!(!anim.is_finished(10.1));
        assert_eq!(anim.offset_x(10.0 + DURATION), -EXIT_DISTANCE);
        assert_eq!(anim.opacity(10.0 + DURATION), 0.0);
        assert!(anim.is_finished(10.0 + DURATION));
    }

    #[test]
    fn spring_back_returns_to_rest() {
        let spring = SpringBack::new(60.0, 0.0);
        assert_eq!(spring.offset_x(0.0), 60.0);
        let mid = spring.offset_x(DURATION / 2.0);
        assert!(mid > 0.0 && mid < 60.0);
        assert_eq!(spring.offset_x(DURATION * 2.0), 0.0);
        assert!(spring.is_finished(DURATION));
    }
}
