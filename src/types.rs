use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Stable identifier of a card. Unique across the whole deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u64);

impl CardId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn is_even(&self) -> bool {
        self.0 % 2 == 0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One dismissible news item. Never mutated after construction: the deck only
/// moves cards between its visible queue and its undo buffer.
#[derive(Getters, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    title: String,
    content: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, alias = "aiInsight")]
    insight: Option<String>,
    // "Pictsure" is the key used by older feed files
    #[serde(default, alias = "Pictsure")]
    image: Option<String>,
}

impl Card {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            title: title.into(),
            content: content.into(),
            source: None,
            date: None,
            insight: None,
            image: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = Some(insight.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Insight text, treating a blank string the same as a missing one.
    pub fn insight_text(&self) -> Option<&str> {
        self.insight.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Horizontal side a card was swiped (or animates) towards.
#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "right")]
    Right,
}

impl SwipeDirection {
    /// Positive offsets mean right.
    pub fn from_offset(offset_x: f32) -> Self {
        if offset_x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// How the exit animation picks its side.
#[derive(strum::EnumIter, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExitPolicy {
    /// The card leaves on the side it was swiped to.
    #[default]
    #[serde(rename = "follow_swipe")]
    FollowSwipe,
    /// Even ids leave to the right, odd ids to the left, whatever the gesture.
    #[serde(rename = "id_parity")]
    IdParity,
}

impl ExitPolicy {
    pub fn exit_direction(&self, card: &Card, swiped: SwipeDirection) -> SwipeDirection {
        match self {
            ExitPolicy::FollowSwipe => swiped,
            ExitPolicy::IdParity => {
                if card.id().is_even() {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                }
            }
        }
    }

    pub fn loc_key(&self) -> &'static str {
        match self {
            ExitPolicy::FollowSwipe => "exit-policy-follow-swipe",
            ExitPolicy::IdParity => "exit-policy-id-parity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_offset_sign() {
        assert_eq!(SwipeDirection::from_offset(150.0), SwipeDirection::Right);
        assert_eq!(SwipeDirection::from_offset(-150.0), SwipeDirection::Left);
        assert_eq!(SwipeDirection::Right.to_string(), "right");
    }

    #[test]
    fn id_parity_ignores_swipe() {
        let even = Card::new(2, "t", "c");
        let odd = Card::new(3, "t", "c");
        let p = ExitPolicy::IdParity;
        assert_eq!(p.exit_direction(&even, SwipeDirection::Left), SwipeDirection::Right);
        assert_eq!(p.exit_direction(&odd, SwipeDirection::Right), SwipeDirection::Left);
        let f = ExitPolicy::FollowSwipe;
        assert_eq!(f.exit_direction(&even, SwipeDirection::Left), SwipeDirection::Left);
    }

    #[test]
    fn card_reads_legacy_keys() {
        let json = r#"{"id":7,"title":"T","content":"C","aiInsight":"deep","Pictsure":"/picts/a.png"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id().get(), 7);
        assert_eq!(card.insight_text(), Some("deep"));
        assert_eq!(card.image().as_deref(), Some("/picts/a.png"));
        assert!(card.source().is_none());
    }

    #[test]
    fn blank_insight_is_missing() {
        let card = Card::new(1, "t", "c").with_insight("   ");
        assert_eq!(card.insight_text(), None);
    }
}
