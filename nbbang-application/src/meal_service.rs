use crate::{
    error::{MealServiceError, MealValidationError},
    meal_lifecycle::MealLifecycle,
    model::{MealChanges, MealDraft, MealPolicy},
    ports::{Clock, IdGenerator, MealRepository},
};
use chrono::NaiveDate;
use nbbang_domain::{
    AggregateAccumulator, DateRange, GroupId, MealAggregate, MealId, MealRecord, Participant,
    ParticipantId, UserId, aggregate,
};

/// Whole-history numbers of a group, as shown on its statistics page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsReport {
    pub summary: MealAggregate,
    pub member_count: usize,
    pub first_meal: Option<NaiveDate>,
    pub last_meal: Option<NaiveDate>,
}

/// Lifecycle manager wired to the persistence collaborator.
///
/// Validation and settlement run before the repository is touched, so a rejected form
/// never produces a write. Repository failures are returned unchanged.
#[derive(Clone, Copy)]
pub struct MealService<'a> {
    lifecycle: MealLifecycle<'a>,
    repository: &'a dyn MealRepository,
}

impl<'a> MealService<'a> {
    pub fn new(
        repository: &'a dyn MealRepository,
        ids: &'a dyn IdGenerator,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            lifecycle: MealLifecycle::new(ids, clock),
            repository,
        }
    }

    pub fn with_policy(mut self, policy: MealPolicy) -> Self {
        self.lifecycle = self.lifecycle.with_policy(policy);
        self
    }

    pub fn create(
        &self,
        group_id: GroupId,
        date: NaiveDate,
        actor: UserId,
        draft: MealDraft,
    ) -> Result<MealRecord, MealServiceError> {
        let record = self
            .lifecycle
            .create(group_id, date, actor, draft)
            .inspect_err(|err| tracing::info!(error = %err, "Meal creation rejected"))?;
        self.repository.put(&record)?;
        tracing::info!(
            meal_id = %record.id,
            group_id = %record.group_id,
            date = %record.date,
            total = record.total_amount.amount(),
            "Meal created"
        );
        Ok(record)
    }

    pub fn update(
        &self,
        meal_id: &MealId,
        changes: MealChanges,
    ) -> Result<MealRecord, MealServiceError> {
        let existing = self.repository.get(meal_id)?;
        let record = self
            .lifecycle
            .update(&existing, changes)
            .inspect_err(|err| {
                tracing::info!(meal_id = %meal_id, error = %err, "Meal update rejected");
            })?;
        self.repository.put(&record)?;
        tracing::info!(
            meal_id = %record.id,
            total = record.total_amount.amount(),
            "Meal updated"
        );
        Ok(record)
    }

    pub fn delete(&self, meal_id: &MealId) -> Result<(), MealServiceError> {
        self.repository.delete(meal_id)?;
        tracing::info!(meal_id = %meal_id, "Meal deleted");
        Ok(())
    }

    pub fn new_guest(&self, name: &str) -> Result<Participant, MealValidationError> {
        self.lifecycle.new_guest(name)
    }

    pub fn meals_on(
        &self,
        group_id: &GroupId,
        date: NaiveDate,
    ) -> Result<Vec<MealRecord>, MealServiceError> {
        Ok(self.repository.by_group_and_date(group_id, date)?)
    }

    pub fn meals_between(
        &self,
        group_id: &GroupId,
        range: DateRange,
    ) -> Result<Vec<MealRecord>, MealServiceError> {
        let mut meals = self.repository.by_group(group_id)?;
        meals.retain(|meal| range.contains(meal.date));
        Ok(meals)
    }

    pub fn group_history(&self, group_id: &GroupId) -> Result<Vec<MealRecord>, MealServiceError> {
        Ok(self.repository.by_group(group_id)?)
    }

    pub fn day_summary(
        &self,
        group_id: &GroupId,
        date: NaiveDate,
    ) -> Result<MealAggregate, MealServiceError> {
        Ok(aggregate(&self.meals_on(group_id, date)?))
    }

    pub fn range_summary(
        &self,
        group_id: &GroupId,
        range: DateRange,
    ) -> Result<MealAggregate, MealServiceError> {
        Ok(aggregate(&self.meals_between(group_id, range)?))
    }

    /// Totals over the whole history, seeded with the current roster so members who
    /// never ate still appear with zero.
    pub fn group_statistics(
        &self,
        group_id: &GroupId,
        roster: &[ParticipantId],
    ) -> Result<StatisticsReport, MealServiceError> {
        let meals = self.group_history(group_id)?;
        let mut accumulator = AggregateAccumulator::with_participants(roster);
        for meal in &meals {
            accumulator.apply(meal);
        }
        let summary = accumulator.into_summary();
        tracing::debug!(
            group_id = %group_id,
            meal_count = summary.meal_count(),
            grand_total = summary.grand_total.amount(),
            "Group statistics computed"
        );

        Ok(StatisticsReport {
            summary,
            member_count: roster.len(),
            first_meal: meals.iter().map(|meal| meal.date).min(),
            last_meal: meals.iter().map(|meal| meal.date).max(),
        })
    }
}
