mod line_item;
mod meal;
mod money;
mod participant;
mod settlement;

pub use line_item::{Consumption, ConsumptionDraft, ItemDraft, ItemId, LineItem};
pub use meal::{DateRange, GroupId, MealId, MealRecord, RestaurantRef, UserId};
pub use money::{Grouped, Money, MoneyParseError};
pub use participant::{Participant, ParticipantId, ParticipantKind};
pub use settlement::Settlement;
