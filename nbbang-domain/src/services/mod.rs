pub mod line_item_factory;
pub mod meal_aggregator;
pub mod roster;
pub mod settlement_calculator;

pub use line_item_factory::{DEFAULT_MAX_ITEM_NAME_CHARS, ItemValidationError, LineItemFactory};
pub use meal_aggregator::{AggregateAccumulator, MealAggregate, aggregate};
pub use roster::{RosterError, RosterIndex};
pub use settlement_calculator::{SettlementCalculator, SettlementError};
