use nbbang_application::IdGenerator;
use nbbang_domain::{ItemId, MealId, ParticipantId};
use uuid::Uuid;

/// Random v4 ids with a kind prefix (`meal_`, `item_`, `guest_`).
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    fn prefixed(prefix: &str) -> String {
        format!("{prefix}_{}", Uuid::new_v4().simple())
    }
}

impl IdGenerator for UuidIdGenerator {
    fn meal_id(&self) -> MealId {
        MealId::new(Self::prefixed("meal"))
    }

    fn item_id(&self) -> ItemId {
        ItemId::new(Self::prefixed("item"))
    }

    fn guest_id(&self) -> ParticipantId {
        ParticipantId::new(Self::prefixed("guest"))
    }
}
