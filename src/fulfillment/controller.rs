use tracing::{debug, info};

use crate::catalog::client::{CatalogClient, CatalogError};
use crate::catalog::types::Category;
use crate::dialog::builders::{
    build_movie_cards, build_option_card, category_options, close, close_with_card, delegate,
    elicit_slot, MAX_MOVIE_CARDS,
};
use crate::dialog::types::{DialogResponse, FulfillmentState, IntentEvent, InvocationSource, Message};
use crate::dialog::validator::{validate_category, ValidationResult, CATEGORY_SLOT};

pub const UNSUPPORTED_CATEGORY_REPLY: &str = "I can't help with that request.";

/// Which half of the turn the caller is asking for. Nothing is remembered
/// between invocations; the caller says which phase it is in every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Validating,
    Fulfilling,
}

impl From<InvocationSource> for TurnPhase {
    fn from(source: InvocationSource) -> Self {
        match source {
            InvocationSource::DialogCodeHook => TurnPhase::Validating,
            InvocationSource::FulfillmentCodeHook => TurnPhase::Fulfilling,
        }
    }
}

/// Drives one movie-recommendation turn.
#[derive(Clone)]
pub struct TurnController {
    catalog: CatalogClient,
}

impl TurnController {
    pub fn new(catalog: CatalogClient) -> Self {
        Self { catalog }
    }

    pub async fn run(&self, event: &IntentEvent) -> Result<DialogResponse, CatalogError> {
        match TurnPhase::from(event.invocation_source) {
            TurnPhase::Validating => Ok(self.validate(event)),
            TurnPhase::Fulfilling => self.fulfill(event).await,
        }
    }

    /// Dialog phase: re-ask for the category or hand control back to the caller.
    pub fn validate(&self, event: &IntentEvent) -> DialogResponse {
        let session_attributes = event.session_attributes();
        let mut slots = event.current_intent.slots.clone();

        match validate_category(event.slot(CATEGORY_SLOT)) {
            ValidationResult::Valid => {
                debug!("Category slot valid, delegating");
                delegate(session_attributes, slots)
            }
            ValidationResult::Invalid {
                violated_slot,
                message,
            } => {
                info!("Slot '{}' failed validation, eliciting", violated_slot);
                slots.insert(violated_slot.clone(), None);
                slots.insert(CATEGORY_SLOT.to_string(), None);

                let card = build_option_card(
                    format!("Choose a {}", violated_slot),
                    message.content.clone(),
                    &category_options(),
                );
                elicit_slot(
                    session_attributes,
                    event.intent_name(),
                    slots,
                    violated_slot,
                    message,
                    card,
                )
            }
        }
    }

    /// Fulfillment phase: fetch the listing and close with movie cards.
    /// The category is trusted here; the dialog phase already checked it.
    pub async fn fulfill(&self, event: &IntentEvent) -> Result<DialogResponse, CatalogError> {
        let session_attributes = event.session_attributes();

        let Some(category) = event.slot(CATEGORY_SLOT).and_then(Category::from_code) else {
            info!("Fulfillment requested without a known category");
            return Ok(close(
                session_attributes,
                FulfillmentState::Fulfilled,
                Message::plain(UNSUPPORTED_CATEGORY_REPLY),
            ));
        };

        let mut movies = self.catalog.fetch_category(category).await?;
        movies.truncate(MAX_MOVIE_CARDS);

        let ids: Vec<u64> = movies.iter().map(|movie| movie.id).collect();
        let links = self.catalog.fetch_provider_links(&ids).await?;

        Ok(close_with_card(
            session_attributes,
            FulfillmentState::Fulfilled,
            Message::plain(category.header()),
            build_movie_cards(&movies, &links),
        ))
    }
}
