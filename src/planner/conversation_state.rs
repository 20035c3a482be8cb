use serde::Serialize;

/// One entry of the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "text", rename_all = "lowercase")]
pub enum Turn {
    User(String),
    Assistant(String),
}

/// Everything collected during a single planning session.
///
/// Each step returns a fresh value and leaves `self` untouched, so a
/// caller can keep or drop the previous state as it sees fit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationState {
    turns: Vec<Turn>,
    city: String,
    interests: Vec<String>,
    itinerary: String,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the city verbatim and log it as a user turn.
    pub fn record_city(&self, city: &str) -> Self {
        let mut next = self.clone();
        next.city = city.to_string();
        next.turns.push(Turn::User(city.to_string()));
        next
    }

    /// Split the raw value on commas and trim each piece.
    ///
    /// Empty pieces (`"a,,b"`) are kept as empty strings. The logged turn
    /// holds the raw, unsplit value.
    pub fn record_interests(&self, interests: &str) -> Self {
        let mut next = self.clone();
        next.interests = interests
            .split(',')
            .map(|interest| interest.trim().to_string())
            .collect();
        next.turns.push(Turn::User(interests.to_string()));
        next
    }

    pub(crate) fn record_itinerary(&self, itinerary: &str) -> Self {
        let mut next = self.clone();
        next.itinerary = itinerary.to_string();
        next.turns.push(Turn::Assistant(itinerary.to_string()));
        next
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn itinerary(&self) -> &str {
        &self.itinerary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = ConversationState::new();
        assert!(state.turns().is_empty());
        assert_eq!(state.city(), "");
        assert!(state.interests().is_empty());
        assert_eq!(state.itinerary(), "");
    }

    #[test]
    fn test_record_city_sets_city_and_appends_turn() {
        let cases = vec!["Paris", "", "  New York  ", "São Paulo"];

        for city in cases {
            let before = ConversationState::new().record_interests("food");
            let after = before.record_city(city);

            assert_eq!(after.city(), city, "city not stored verbatim: {:?}", city);
            assert_eq!(after.turns().len(), before.turns().len() + 1);
            assert_eq!(after.turns().last(), Some(&Turn::User(city.to_string())));
        }
    }

    #[test]
    fn test_record_city_leaves_previous_state_untouched() {
        let before = ConversationState::new();
        let after = before.record_city("Lisbon");

        assert_eq!(before, ConversationState::new());
        assert_eq!(after.city(), "Lisbon");
    }

    #[test]
    fn test_record_city_twice() {
        let once = ConversationState::new().record_city("Rome");
        let twice = once.record_city("Rome");

        assert_eq!(twice.city(), once.city());
        assert_eq!(twice.turns().len(), 2);
    }

    #[test]
    fn test_record_interests_splits_and_trims() {
        let state = ConversationState::new().record_interests("art, food ,  history");
        assert_eq!(state.interests(), ["art", "food", "history"]);
    }

    #[test]
    fn test_record_interests_keeps_empty_pieces() {
        let cases: Vec<(&str, Vec<&str>)> = vec![
            ("a,,b", vec!["a", "", "b"]),
            ("", vec![""]),
            ("museums,", vec!["museums", ""]),
            (" , ", vec!["", ""]),
        ];

        for (raw, expected) in cases {
            let state = ConversationState::new().record_interests(raw);
            assert_eq!(state.interests(), expected.as_slice(), "Failed for input: {:?}", raw);
        }
    }

    #[test]
    fn test_record_interests_logs_raw_text() {
        let state = ConversationState::new().record_interests(" museums ,food ");
        assert_eq!(state.turns(), [Turn::User(" museums ,food ".to_string())]);
    }

    #[test]
    fn test_record_interests_replaces_previous_list() {
        let state = ConversationState::new()
            .record_interests("art, food")
            .record_interests("hiking");

        assert_eq!(state.interests(), ["hiking"]);
        assert_eq!(state.turns().len(), 2);
    }

    #[test]
    fn test_record_itinerary_appends_assistant_turn() {
        let state = ConversationState::new()
            .record_city("Kyoto")
            .record_itinerary("- Fushimi Inari");

        assert_eq!(state.itinerary(), "- Fushimi Inari");
        assert_eq!(state.turns()[1], Turn::Assistant("- Fushimi Inari".to_string()));
    }

    #[test]
    fn test_turn_serializes_with_role_tag() {
        let json = serde_json::to_value(Turn::User("Paris".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "user", "text": "Paris" }));
    }
}
