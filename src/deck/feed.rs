// Initial card feed: either the built-in sample stories or a JSON file
// containing an array of cards in display order.

use std::path::Path;

use super::{DeckState, FeedError};
use crate::types::Card;

/// Sample stories shown when no feed file is configured.
pub fn builtin_cards() -> Vec<Card> {
    vec![
        Card::new(
            1,
            "Insider Reveals Brooks Koepka Is a 'Maniac' Who Doesnt Care About Consequences as LIV Golf 2025 Inches...",
            "Golfer Brooks Koepka continues using a battered, original Nike Vapor Fly Pro 3-iron, despite damage and the availability of newer models. He reportedly doesn't care about potential consequences, leading a fellow golfer to call him a 'maniac.' This contrasts with other Nike-sponsored golfers who switched brands after Nike exited golf equipment manufacturing in 2016.",
        )
        .with_source("essentiallysports.com")
        .with_date("Jan 10")
        .with_insight("AI分析：Brooks Koepka的这种行为展现了他独特的个性和对器材的特殊依恋。从专业角度来看，这反映了运动员对自己熟悉装备的信赖度，但也带来了潜在的性能风险。这种行为可能影响其在LIV Golf 2025赛季的表现，特别是在高强度比赛中装备可靠性的考验。")
        .with_image("/picts/koepka.png"),
        Card::new(
            2,
            "Major Sports League Announces New TV Deal",
            "A groundbreaking television rights agreement has been reached...",
        )
        .with_source("sportsnews.com")
        .with_date("Jan 9")
        .with_insight("AI分析：这项电视转播权协议将对体育产业产生深远影响..."),
        Card::new(
            3,
            "Rising Star Athletes to Watch in 2025",
            "Emerging talents across various sports are making waves...",
        )
        .with_source("athleticreview.com")
        .with_date("Jan 8")
        .with_insight("AI分析：新一代运动员的崛起预示着体育界的新变革..."),
    ]
}

pub fn parse_feed(json: &str) -> Result<Vec<Card>, FeedError> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    Ok(cards)
}

pub fn load_feed_file(path: &Path) -> Result<Vec<Card>, FeedError> {
    let data = std::fs::read_to_string(path)?;
    parse_feed(&data)
}

/// Builds the starting deck. Any problem with the configured feed file is
/// logged and the built-in stories are used instead.
pub fn load_initial_deck(feed_path: Option<&Path>, swipe_threshold: f32) -> DeckState {
    let from_file = feed_path.map(|path| {
        load_feed_file(path).and_then(DeckState::new).map_err(|e| (path, e))
    });

    let deck = match from_file {
        Some(Ok(deck)) => {
            log::info!(
                "Loaded {} cards from {}",
                deck.visible_len(),
                feed_path.map(|p| p.to_string_lossy()).unwrap_or_default()
            );
            deck
        }
        Some(Err((path, e))) => {
            log::warn!(
                "Cannot load feed {}: {}. Falling back to built-in cards",
                path.to_string_lossy(),
                e
            );
            builtin_deck()
        }
        None => builtin_deck(),
    };
    deck.with_swipe_threshold(swipe_threshold)
}

fn builtin_deck() -> DeckState {
    DeckState::new(builtin_cards()).unwrap_or_else(|e| {
        log::error!("Built-in feed is invalid: {e}");
        DeckState::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_feed_is_valid() {
        let deck = DeckState::new(builtin_cards()).unwrap();
        assert_eq!(deck.visible_len(), 3);
        assert_eq!(deck.front().unwrap().id().get(), 1);
        assert!(deck.front().unwrap().image().is_some());
    }

    #[test]
    fn parse_feed_keeps_order_and_optional_fields() {
        let json = r#"[
            {"id": 10, "title": "A", "content": "a", "source": "x.com"},
            {"id": 11, "title": "B", "content": "b", "date": "Feb 1", "insight": "why"}
        ]"#;
        let cards = parse_feed(json).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title(), "A");
        assert_eq!(cards[0].source().as_deref(), Some("x.com"));
        assert!(cards[0].date().is_none());
        assert_eq!(cards[1].insight_text(), Some("why"));
    }

    #[test]
    fn parse_feed_rejects_garbage() {
        assert!(matches!(parse_feed("{not json"), Err(FeedError::Parse(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[{"id": 1, "title": "A", "content": "a"}, {"id": 1, "title": "B", "content": "b"}]"#;
        let cards = parse_feed(json).unwrap();
        assert!(matches!(DeckState::new(cards), Err(FeedError::DuplicateId(1))));
    }

    #[test]
    fn load_initial_deck_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 5, "title": "Only", "content": "one"}}]"#).unwrap();
        let deck = load_initial_deck(Some(file.path()), 120.0);
        assert_eq!(deck.visible_len(), 1);
        assert_eq!(deck.front().unwrap().title(), "Only");
        assert_eq!(deck.swipe_threshold(), 120.0);
    }

    #[test]
    fn load_initial_deck_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let deck = load_initial_deck(Some(&dir.path().join("missing.json")), 100.0);
        assert_eq!(deck.visible_len(), builtin_cards().len());
    }

    #[test]
    fn load_initial_deck_falls_back_on_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 2, "title": "A", "content": "a"}}, {{"id": 2, "title": "B", "content": "b"}}]"#
        )
        .unwrap();
        let deck = load_initial_deck(Some(file.path()), 100.0);
        assert_eq!(deck.visible_len(), 3);
    }
}
