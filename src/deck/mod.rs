// Card stack state: visible queue, undo buffer and the expanded marker.
// Every change goes through DeckState::apply so the UI never touches the
// sequences directly.

use std::collections::{HashSet, VecDeque};

use crate::types::{Card, CardId, SwipeDirection};
use crate::ui_constants::SWIPE_THRESHOLD;

pub mod error;
pub mod feed;

pub use error::FeedError;

#[derive(Debug, Clone, PartialEq)]
pub enum DeckAction {
    Dismiss(SwipeDirection),
    Restore,
    ToggleExpand(CardId),
    /// Horizontal offset of the front card when the pointer was released.
    DragRelease { offset_x: f32 },
}

/// What a single action did to the deck. The animation layer keys off this.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Dismissed { card: Card, direction: SwipeDirection },
    Restored { card: Card },
    ExpandChanged { expanded: Option<CardId> },
    Unchanged,
}

impl Transition {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Transition::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct DeckState {
    visible: VecDeque<Card>,
    // front = most recently dismissed
    undo: VecDeque<Card>,
    expanded: Option<CardId>,
    swipe_threshold: f32,
}

impl Default for DeckState {
    fn default() -> Self {
        Self {
            visible: VecDeque::new(),
            undo: VecDeque::new(),
            expanded: None,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl DeckState {
    /// Builds a deck from an ordered feed. Ids must be unique.
    pub fn new(cards: Vec<Card>) -> Result<Self, FeedError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(*card.id()) {
                return Err(FeedError::DuplicateId(card.id().get()));
            }
        }
        Ok(Self {
            visible: cards.into(),
            ..Self::default()
        })
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.set_swipe_threshold(threshold);
        self
    }

    pub fn set_swipe_threshold(&mut self, threshold: f32) {
        if threshold.is_finite() && threshold > 0.0 {
            self.swipe_threshold = threshold;
        } else {
            log::warn!("Ignoring invalid swipe threshold {threshold}");
        }
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    pub fn visible(&self) -> impl ExactSizeIterator<Item = &Card> + DoubleEndedIterator {
        self.visible.iter()
    }

    pub fn undo_buffer(&self) -> impl ExactSizeIterator<Item = &Card> + DoubleEndedIterator {
        self.undo.iter()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn front(&self) -> Option<&Card> {
        self.visible.front()
    }

    pub fn expanded(&self) -> Option<CardId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: CardId) -> bool {
        self.expanded == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn can_restore(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Single entry point for every state change.
    pub fn apply(&mut self, action: DeckAction) -> Transition {
        let transition = match action {
            DeckAction::Dismiss(direction) => self.dismiss(direction),
            DeckAction::Restore => self.restore(),
            DeckAction::ToggleExpand(id) => self.toggle_expand(id),
            DeckAction::DragRelease { offset_x } => self.on_drag_release(offset_x),
        };
        if !transition.is_unchanged() {
            log::debug!(
                "deck: {:?} -> visible={} undo={} expanded={:?}",
                transition_name(&transition),
                self.visible.len(),
                self.undo.len(),
                self.expanded
            );
        }
        transition
    }

    /// Moves the front card to the top of the undo buffer.
    pub fn dismiss(&mut self, direction: SwipeDirection) -> Transition {
        let Some(card) = self.visible.pop_front() else {
            return Transition::Unchanged;
        };
        self.undo.push_front(card.clone());
        self.expanded = None;
        Transition::Dismissed { card, direction }
    }

    /// Puts the most recently dismissed card back on top. No-op when nothing was dismissed.
    pub fn restore(&mut self) -> Transition {
        let Some(card) = self.undo.pop_front() else {
            return Transition::Unchanged;
        };
        self.visible.push_front(card.clone());
        self.expanded = None;
        Transition::Restored { card }
    }

    /// Expansion is limited to the front card; any other id is ignored.
    pub fn toggle_expand(&mut self, id: CardId) -> Transition {
        if self.front().map(|c| *c.id()) != Some(id) {
            return Transition::Unchanged;
        }
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
        Transition::ExpandChanged {
            expanded: self.expanded,
        }
    }

    pub fn on_drag_release(&mut self, offset_x: f32) -> Transition {
        if !self.is_swipe(offset_x) {
            return Transition::Unchanged;
        }
        self.dismiss(SwipeDirection::from_offset(offset_x))
    }

    pub fn is_swipe(&self, offset_x: f32) -> bool {
        offset_x.abs() > self.swipe_threshold
    }
}

fn transition_name(t: &Transition) -> &'static str {
    match t {
        Transition::Dismissed { .. } => "dismissed",
        Transition::Restored { .. } => "restored",
        Transition::ExpandChanged { .. } => "expand",
        Transition::Unchanged => "unchanged",
    }
}
