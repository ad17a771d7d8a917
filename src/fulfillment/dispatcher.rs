use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::client::CatalogClient;
use crate::config::CatalogConfig;
use crate::dialog::builders::{build_option_card, close_with_card, intent_suggestions};
use crate::dialog::types::{DialogResponse, FulfillmentState, IntentEvent, Message};
use crate::error::HandlerError;
use crate::fulfillment::controller::TurnController;

pub const RECOMMEND_MOVIE_INTENT: &str = "RecommendMovie";
pub const WELCOME_INTENT: &str = "Welcome";
pub const WELCOME_GREETING: &str = "Hello, how can I help you?";

/// Host-supplied invocation metadata. The core never looks inside it.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub request_id: Option<String>,
}

/// Entry point: routes an event by intent name.
#[derive(Clone)]
pub struct FulfillmentHandler {
    controller: TurnController,
}

impl FulfillmentHandler {
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            controller: TurnController::new(catalog),
        }
    }

    pub fn from_config(config: CatalogConfig) -> Self {
        Self::new(CatalogClient::new(config))
    }

    /// Decodes a raw event and dispatches it.
    pub async fn handle(
        &self,
        event: Value,
        context: &InvocationContext,
    ) -> Result<DialogResponse, HandlerError> {
        let invocation_id = Uuid::new_v4();
        debug!(
            "Invocation {} started (request {})",
            invocation_id,
            context.request_id.as_deref().unwrap_or("-")
        );

        let event: IntentEvent = serde_json::from_value(event).map_err(HandlerError::InvalidEvent)?;
        let result = self.dispatch(&event).await;
        if let Err(e) = &result {
            warn!("Invocation {} failed: {}", invocation_id, e);
        }
        result
    }

    pub async fn dispatch(&self, event: &IntentEvent) -> Result<DialogResponse, HandlerError> {
        info!(
            intent = event.intent_name(),
            source = ?event.invocation_source,
            user = event.user_id.as_deref().unwrap_or("-"),
            transcript = event.input_transcript.as_deref().unwrap_or("-"),
            confirmation = event
                .current_intent
                .confirmation_status
                .as_deref()
                .unwrap_or("-"),
            "Event received"
        );

        match event.intent_name() {
            RECOMMEND_MOVIE_INTENT => Ok(self.controller.run(event).await?),
            WELCOME_INTENT => Ok(welcome(event)),
            other => Err(HandlerError::UnsupportedIntent {
                name: other.to_string(),
            }),
        }
    }
}

/// Fixed greeting, whatever the phase or slots.
pub fn welcome(event: &IntentEvent) -> DialogResponse {
    close_with_card(
        event.session_attributes(),
        FulfillmentState::Fulfilled,
        Message::plain(WELCOME_GREETING),
        build_option_card("I can help you with:", "choose an option", &intent_suggestions()),
    )
}
