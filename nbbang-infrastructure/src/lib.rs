#![warn(clippy::uninlined_format_args)]

pub mod clock;
pub mod id_generator;
pub mod meal_log;
pub mod repository;

pub use clock::SystemClock;
pub use id_generator::UuidIdGenerator;
pub use meal_log::{LoggedEdit, LoggedMeal, MealLog, MealLogError, ReplayedMeal};
pub use repository::InMemoryMealRepository;
