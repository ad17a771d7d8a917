use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Slot name -> filled value. Unfilled slots are present with `None`.
pub type Slots = BTreeMap<String, Option<String>>;

/// Opaque bag owned by the caller, echoed back on every response.
pub type SessionAttributes = BTreeMap<String, String>;

pub const CARD_CONTENT_TYPE: &str = "application/vnd.amazonaws.card.generic";
pub const CARD_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationSource {
    /// Dialog phase: slots may still be elicited.
    DialogCodeHook,
    /// Fulfillment phase: perform the action and close the turn.
    FulfillmentCodeHook,
}

/// Inbound intent-recognition event, one per conversational turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentEvent {
    pub current_intent: CurrentIntent,
    pub invocation_source: InvocationSource,
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Slots,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

impl IntentEvent {
    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|value| value.as_deref())
    }

    /// Session attributes with a missing/null bag treated as empty.
    pub fn session_attributes(&self) -> SessionAttributes {
        self.session_attributes.clone().unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub value: String,
}

impl Button {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericAttachment {
    pub title: String,
    #[serde(rename = "subTitle")]
    pub sub_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
}

/// Rich-attachment UI hint carried next to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCard {
    pub content_type: String,
    pub version: u32,
    pub generic_attachments: Vec<GenericAttachment>,
}

impl ResponseCard {
    pub fn generic(attachments: Vec<GenericAttachment>) -> Self {
        Self {
            content_type: CARD_CONTENT_TYPE.to_string(),
            version: CARD_VERSION,
            generic_attachments: attachments,
        }
    }

    pub fn buttons(&self) -> &[Button] {
        self.generic_attachments
            .first()
            .and_then(|attachment| attachment.buttons.as_deref())
            .unwrap_or(&[])
    }
}

/// Exactly one of these is returned per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
        response_card: ResponseCard,
    },
    Delegate { slots: Slots },
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}
