//! Front-end independent itinerary pipeline.
//!
//! A session starts from an empty [`ConversationState`], records the city
//! and the interests, then asks a [`CompletionClient`] for the itinerary.

pub mod completion;
pub mod conversation_state;
pub mod error;
pub mod itinerary;

pub use completion::{ChatMessage, CompletionClient, CompletionConfig};
pub use conversation_state::ConversationState;
pub use error::PlannerError;
pub use itinerary::generate_itinerary;

/// Run one full session: city, interests, itinerary.
///
/// Returns the generated text together with the final state so callers
/// can render the turn log if they want to.
pub async fn plan_trip(
    city: &str,
    interests: &str,
    client: &dyn CompletionClient,
    config: &CompletionConfig,
) -> Result<(String, ConversationState), PlannerError> {
    let state = ConversationState::new()
        .record_city(city)
        .record_interests(interests);

    generate_itinerary(&state, client, config).await
}
