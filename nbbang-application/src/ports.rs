use crate::error::RepositoryError;
use chrono::{DateTime, NaiveDate, Utc};
use nbbang_domain::{GroupId, ItemId, MealId, MealRecord, ParticipantId};
use std::collections::HashMap;

/// Persistence collaborator. Records are stored and returned verbatim.
pub trait MealRepository: Send + Sync {
    /// Inserts or replaces the record with the same id.
    fn put(&self, meal: &MealRecord) -> Result<(), RepositoryError>;

    fn get(&self, meal_id: &MealId) -> Result<MealRecord, RepositoryError>;

    fn by_group_and_date(
        &self,
        group_id: &GroupId,
        date: NaiveDate,
    ) -> Result<Vec<MealRecord>, RepositoryError>;

    fn by_group(&self, group_id: &GroupId) -> Result<Vec<MealRecord>, RepositoryError>;

    fn delete(&self, meal_id: &MealId) -> Result<(), RepositoryError>;
}

/// Identity collaborator used for display only.
pub trait ParticipantDirectory: Send + Sync {
    fn display_name(&self, participant: &ParticipantId) -> Option<&str>;
}

impl ParticipantDirectory for HashMap<ParticipantId, String> {
    fn display_name(&self, participant: &ParticipantId) -> Option<&str> {
        self.get(participant).map(String::as_str)
    }
}

pub trait IdGenerator: Send + Sync {
    fn meal_id(&self) -> MealId;
    fn item_id(&self) -> ItemId;
    /// Guest ids are never reused across meals.
    fn guest_id(&self) -> ParticipantId;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
