#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod meal_lifecycle;
pub mod meal_service;
pub mod model;
pub mod ports;

pub use error::{MealServiceError, MealValidationError, RepositoryError};
pub use meal_lifecycle::MealLifecycle;
pub use meal_service::{MealService, StatisticsReport};
pub use model::{DEFAULT_MAX_MEMO_CHARS, MealChanges, MealDraft, MealPolicy};
pub use ports::{Clock, IdGenerator, MealRepository, ParticipantDirectory};
