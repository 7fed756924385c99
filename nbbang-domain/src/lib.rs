#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Consumption, ConsumptionDraft, DateRange, GroupId, ItemDraft, ItemId, LineItem, MealId,
    MealRecord, Money, MoneyParseError, Participant, ParticipantId, ParticipantKind,
    RestaurantRef, Settlement, UserId,
};
pub use services::{
    AggregateAccumulator, ItemValidationError, LineItemFactory, MealAggregate, RosterError,
    RosterIndex, SettlementCalculator, SettlementError, aggregate,
};
