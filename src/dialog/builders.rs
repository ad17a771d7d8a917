//! Constructors for the dialog-action payloads and response cards.
//!
//! Builders only enforce card arity (extra buttons/attachments are dropped);
//! session attributes pass through untouched.

use crate::catalog::types::{Category, MovieRecord};
use crate::dialog::types::{
    Button, DialogAction, DialogResponse, FulfillmentState, GenericAttachment, Message,
    ResponseCard, SessionAttributes, Slots,
};

pub const MAX_CARD_BUTTONS: usize = 5;
pub const MAX_MOVIE_CARDS: usize = 10;

pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
    response_card: ResponseCard,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
            response_card,
        },
    }
}

pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
            response_card: None,
        },
    }
}

pub fn close_with_card(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
    response_card: ResponseCard,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
            response_card: Some(response_card),
        },
    }
}

/// Single-attachment card with up to five buttons.
pub fn build_option_card(
    title: impl Into<String>,
    subtitle: impl Into<String>,
    options: &[Button],
) -> ResponseCard {
    let buttons = if options.is_empty() {
        None
    } else {
        Some(options.iter().take(MAX_CARD_BUTTONS).cloned().collect())
    };

    ResponseCard::generic(vec![GenericAttachment {
        title: title.into(),
        sub_title: subtitle.into(),
        image_url: None,
        attachment_link_url: None,
        buttons,
    }])
}

/// One attachment per movie, at most ten. `links[i]` belongs to `movies[i]`;
/// callers pass one link per movie.
pub fn build_movie_cards(movies: &[MovieRecord], links: &[String]) -> ResponseCard {
    debug_assert_eq!(movies.len(), links.len(), "one provider link per movie");
    let attachments = movies
        .iter()
        .zip(links)
        .take(MAX_MOVIE_CARDS)
        .map(|(movie, link)| GenericAttachment {
            title: movie.title.clone(),
            sub_title: format!("Rating: {}", format_rating(movie.rating)),
            image_url: movie.poster_url.clone(),
            attachment_link_url: Some(link.clone()),
            buttons: None,
        })
        .collect();

    ResponseCard::generic(attachments)
}

/// Whole scores keep one decimal ("8.0"); others print as-is ("7.25").
/// An integer `vote_average` such as `6` also renders as "6.0", so every
/// whole score reads the same regardless of how upstream encoded it.
pub fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

pub fn category_options() -> Vec<Button> {
    Category::ALL
        .iter()
        .map(|category| Button::new(category.label(), category.code()))
        .collect()
}

/// What the welcome card offers.
pub fn intent_suggestions() -> Vec<Button> {
    vec![Button::new("Recommending Movies", "suggest movies")]
}
