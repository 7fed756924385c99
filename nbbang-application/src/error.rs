use nbbang_domain::{ItemValidationError, MealId, ParticipantId, RosterError, SettlementError};

/// Why a meal form was rejected. Raised before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MealValidationError {
    #[error("no restaurant selected")]
    NoRestaurant,
    #[error("meal has no items")]
    NoItems,
    #[error("meal has no participants")]
    NoParticipants,
    #[error("participant {0} appears twice in the roster")]
    DuplicateParticipant(ParticipantId),
    #[error("memo is longer than {max} characters")]
    MemoTooLong { max: usize },
    #[error("guest name is empty")]
    EmptyGuestName,
    #[error("meal total exceeds the supported amount")]
    TotalTooLarge,
    /// `position` is the zero-based index of the offending item in the submitted list.
    #[error("item {position} is invalid: {source}")]
    InvalidItem {
        position: usize,
        #[source]
        source: ItemValidationError,
    },
}

impl From<RosterError> for MealValidationError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::Empty => MealValidationError::NoParticipants,
            RosterError::DuplicateParticipant(id) => MealValidationError::DuplicateParticipant(id),
        }
    }
}

/// Failure reported by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("meal {meal} not found")]
    NotFound { meal: MealId },
    #[error("meal storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MealServiceError {
    #[error(transparent)]
    Validation(#[from] MealValidationError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_map_to_meal_errors() {
        assert_eq!(
            MealValidationError::from(RosterError::Empty),
            MealValidationError::NoParticipants
        );
        assert_eq!(
            MealValidationError::from(RosterError::DuplicateParticipant("a".into())),
            MealValidationError::DuplicateParticipant("a".into())
        );
    }

    #[test]
    fn item_error_keeps_position_and_source() {
        let err = MealValidationError::InvalidItem {
            position: 2,
            source: ItemValidationError::InvalidPrice,
        };
        assert_eq!(
            err.to_string(),
            "item 2 is invalid: price must be a positive whole amount no larger than 10000000000"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
