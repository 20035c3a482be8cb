use tracing::{debug, info};

use super::completion::{ChatMessage, CompletionClient, CompletionConfig};
use super::conversation_state::ConversationState;
use super::error::PlannerError;

const USER_REQUEST: &str = "Create an itinerary for my day trip.";

/// Fill the travel-assistant instruction with the recorded city and interests.
///
/// Empty values are passed through as-is.
pub fn system_instruction(state: &ConversationState) -> String {
    format!(
        "You are a helpful travel assistant. Create a day trip itinerary for {} based on the user's interests: {}. Provide a brief, bulleted itinerary.",
        state.city(),
        state.interests().join(", ")
    )
}

pub fn itinerary_messages(state: &ConversationState) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_instruction(state)),
        ChatMessage::user(USER_REQUEST),
    ]
}

/// Ask the completion service for an itinerary.
///
/// On success returns the generated text and a new state carrying it. Any
/// client error is returned untouched and `state` stays as it was.
pub async fn generate_itinerary(
    state: &ConversationState,
    client: &dyn CompletionClient,
    config: &CompletionConfig,
) -> Result<(String, ConversationState), PlannerError> {
    let messages = itinerary_messages(state);
    debug!("Requesting itinerary with {} messages using {:?}", messages.len(), config);

    let itinerary = client.complete(&messages, config).await?;
    info!("Received itinerary for {:?} ({} bytes)", state.city(), itinerary.len());

    let next = state.record_itinerary(&itinerary);
    Ok((itinerary, next))
}
