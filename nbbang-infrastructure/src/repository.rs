use chrono::NaiveDate;
use dashmap::DashMap;
use nbbang_application::{MealRepository, RepositoryError};
use nbbang_domain::{GroupId, MealId, MealRecord};
use std::{cmp::Reverse, sync::Arc};

/// Process-local meal storage.
///
/// Writes replace the whole record (last write wins). Query results are newest first:
/// by creation time within a day, by date then creation time across a group.
#[derive(Clone, Default)]
pub struct InMemoryMealRepository {
    inner: Arc<DashMap<MealId, MealRecord>>,
}

impl InMemoryMealRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn collect<F>(&self, keep: F) -> Vec<MealRecord>
    where
        F: Fn(&MealRecord) -> bool,
    {
        self.inner
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl MealRepository for InMemoryMealRepository {
    fn put(&self, meal: &MealRecord) -> Result<(), RepositoryError> {
        self.inner.insert(meal.id.clone(), meal.clone());
        Ok(())
    }

    fn get(&self, meal_id: &MealId) -> Result<MealRecord, RepositoryError> {
        self.inner
            .get(meal_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepositoryError::NotFound {
                meal: meal_id.clone(),
            })
    }

    fn by_group_and_date(
        &self,
        group_id: &GroupId,
        date: NaiveDate,
    ) -> Result<Vec<MealRecord>, RepositoryError> {
        let mut meals = self.collect(|meal| &meal.group_id == group_id && meal.date == date);
        meals.sort_by_key(|meal| Reverse(meal.created_at));
        Ok(meals)
    }

    fn by_group(&self, group_id: &GroupId) -> Result<Vec<MealRecord>, RepositoryError> {
        let mut meals = self.collect(|meal| &meal.group_id == group_id);
        meals.sort_by_key(|meal| Reverse((meal.date, meal.created_at)));
        Ok(meals)
    }

    fn delete(&self, meal_id: &MealId) -> Result<(), RepositoryError> {
        self.inner
            .remove(meal_id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound {
                meal: meal_id.clone(),
            })
    }
}
