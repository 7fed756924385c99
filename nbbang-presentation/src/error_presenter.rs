use crate::labels::Labels;
use nbbang_application::{MealServiceError, MealValidationError, RepositoryError};
use nbbang_domain::{ItemValidationError, SettlementError};
use nbbang_i18n as i18n;

/// Message shown to the person filling in the meal form.
pub fn format_meal_error(error: &MealServiceError, labels: &Labels<'_>) -> String {
    match error {
        MealServiceError::Validation(err) => format_validation_error(err, labels),
        MealServiceError::Settlement(err) => format_settlement_error(err, labels),
        MealServiceError::Repository(RepositoryError::NotFound { .. }) => {
            i18n::MEAL_NOT_FOUND.to_string()
        }
        MealServiceError::Repository(RepositoryError::Unavailable(_)) => {
            i18n::STORAGE_UNAVAILABLE.to_string()
        }
    }
}

pub fn format_validation_error(error: &MealValidationError, labels: &Labels<'_>) -> String {
    match error {
        MealValidationError::NoRestaurant => i18n::SELECT_RESTAURANT.to_string(),
        MealValidationError::NoItems => i18n::ADD_ITEMS.to_string(),
        MealValidationError::NoParticipants => i18n::SELECT_PARTICIPANTS.to_string(),
        MealValidationError::DuplicateParticipant(id) => {
            i18n::duplicate_participant(labels.participant(id))
        }
        MealValidationError::MemoTooLong { max } => i18n::memo_too_long(*max),
        MealValidationError::EmptyGuestName => i18n::ENTER_GUEST_NAME.to_string(),
        MealValidationError::TotalTooLarge => i18n::TOTAL_TOO_LARGE.to_string(),
        MealValidationError::InvalidItem { position, source } => {
            i18n::item_at(*position, format_item_error(source, labels))
        }
    }
}

pub fn format_item_error(error: &ItemValidationError, labels: &Labels<'_>) -> String {
    match error {
        ItemValidationError::EmptyName => i18n::ENTER_ITEM_NAME.to_string(),
        ItemValidationError::NameTooLong { max } => i18n::item_name_too_long(*max),
        ItemValidationError::InvalidPrice => i18n::ENTER_PRICE.to_string(),
        ItemValidationError::NoConsumerSelected => i18n::SELECT_CONSUMER.to_string(),
        ItemValidationError::NoParticipantsSelected => {
            i18n::SELECT_SHARED_PARTICIPANTS.to_string()
        }
        ItemValidationError::DuplicateConsumer(id) => {
            i18n::duplicate_consumer(labels.participant(id))
        }
        ItemValidationError::UnknownParticipant(id) => {
            i18n::unknown_participant(labels.participant(id))
        }
    }
}

fn format_settlement_error(error: &SettlementError, labels: &Labels<'_>) -> String {
    match error {
        SettlementError::UnknownParticipant { participant, .. } => format!(
            "{} {}",
            i18n::SETTLEMENT_FAILED,
            i18n::unknown_participant(labels.participant(participant))
        ),
        SettlementError::NoConsumers { .. } => format!(
            "{} {}",
            i18n::SETTLEMENT_FAILED,
            i18n::SELECT_SHARED_PARTICIPANTS
        ),
    }
}
