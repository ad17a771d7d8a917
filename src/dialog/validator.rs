use crate::catalog::types::Category;
use crate::dialog::types::Message;

pub const CATEGORY_SLOT: &str = "category";
pub const CATEGORY_REMEDIATION: &str = "Choose from the given categories.";

/// Verdict on a single slot value. An invalid verdict always carries both
/// the offending slot and the message to show; a valid one carries neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid {
        violated_slot: String,
        message: Message,
    },
}

impl ValidationResult {
    pub fn invalid(violated_slot: impl Into<String>, content: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            violated_slot: violated_slot.into(),
            message: Message::plain(content),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violated_slot(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { violated_slot, .. } => Some(violated_slot),
        }
    }

    pub fn message(&self) -> Option<&Message> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { message, .. } => Some(message),
        }
    }
}

/// Valid iff `value` is exactly one of the category codes "1".."4".
pub fn validate_category(value: Option<&str>) -> ValidationResult {
    match value.and_then(Category::from_code) {
        Some(_) => ValidationResult::Valid,
        None => ValidationResult::invalid(CATEGORY_SLOT, CATEGORY_REMEDIATION),
    }
}
