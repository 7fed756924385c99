#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use nbbang_application::{Clock, IdGenerator, MealRepository, RepositoryError};
use nbbang_domain::{GroupId, ItemId, MealId, MealRecord, ParticipantId};
use std::sync::{
    Mutex,
    atomic::{AtomicI64, AtomicUsize, Ordering},
};

#[derive(Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl SequentialIds {
    fn bump(&self) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl IdGenerator for SequentialIds {
    fn meal_id(&self) -> MealId {
        MealId::new(format!("meal_{}", self.bump()))
    }

    fn item_id(&self) -> ItemId {
        ItemId::new(format!("item_{}", self.bump()))
    }

    fn guest_id(&self) -> ParticipantId {
        ParticipantId::new(format!("guest_{}", self.bump()))
    }
}

/// Advances one minute per reading.
pub struct TickingClock {
    minutes: AtomicI64,
}

impl TickingClock {
    pub fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }
}

impl Default for TickingClock {
    fn default() -> Self {
        Self {
            minutes: AtomicI64::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let minutes = self.minutes.fetch_add(1, Ordering::Relaxed);
        Self::base() + Duration::minutes(minutes)
    }
}

/// Vec-backed repository that counts writes and can be switched to failing.
#[derive(Default)]
pub struct RecordingRepository {
    meals: Mutex<Vec<MealRecord>>,
    puts: AtomicUsize,
    unavailable: Mutex<bool>,
}

impl RecordingRepository {
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::Relaxed)
    }

    pub fn go_down(&self) {
        *self.unavailable.lock().unwrap() = true;
    }

    pub fn stored(&self) -> Vec<MealRecord> {
        self.meals.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if *self.unavailable.lock().unwrap() {
            Err(RepositoryError::Unavailable("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

impl MealRepository for RecordingRepository {
    fn put(&self, meal: &MealRecord) -> Result<(), RepositoryError> {
        self.check()?;
        self.puts.fetch_add(1, Ordering::Relaxed);
        let mut meals = self.meals.lock().unwrap();
        meals.retain(|stored| stored.id != meal.id);
        meals.push(meal.clone());
        Ok(())
    }

    fn get(&self, meal_id: &MealId) -> Result<MealRecord, RepositoryError> {
        self.check()?;
        self.meals
            .lock()
            .unwrap()
            .iter()
            .find(|meal| &meal.id == meal_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                meal: meal_id.clone(),
            })
    }

    fn by_group_and_date(
        &self,
        group_id: &GroupId,
        date: NaiveDate,
    ) -> Result<Vec<MealRecord>, RepositoryError> {
        self.check()?;
        Ok(self
            .meals
            .lock()
            .unwrap()
            .iter()
            .filter(|meal| &meal.group_id == group_id && meal.date == date)
            .cloned()
            .collect())
    }

    fn by_group(&self, group_id: &GroupId) -> Result<Vec<MealRecord>, RepositoryError> {
        self.check()?;
        Ok(self
            .meals
            .lock()
            .unwrap()
            .iter()
            .filter(|meal| &meal.group_id == group_id)
            .cloned()
            .collect())
    }

    fn delete(&self, meal_id: &MealId) -> Result<(), RepositoryError> {
        self.check()?;
        let mut meals = self.meals.lock().unwrap();
        let before = meals.len();
        meals.retain(|meal| &meal.id != meal_id);
        if meals.len() == before {
            return Err(RepositoryError::NotFound {
                meal: meal_id.clone(),
            });
        }
        Ok(())
    }
}
