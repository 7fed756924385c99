use crate::model::{MealId, MealRecord, Money, ParticipantId};
use chrono::NaiveDate;
use fxhash::FxHashMap;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Totals over a collection of meals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealAggregate {
    pub per_participant_total: IndexMap<ParticipantId, Money>,
    pub per_meal_total: IndexMap<MealId, Money>,
    /// Item totals per calendar day, oldest first.
    pub per_date_total: BTreeMap<NaiveDate, Money>,
    pub grand_total: Money,
    /// Units left unassigned by shared-split rounding across all meals.
    pub rounding_drift: Money,
}

impl MealAggregate {
    pub fn meal_count(&self) -> usize {
        self.per_meal_total.len()
    }

    pub fn participant_total(&self, participant: &ParticipantId) -> Money {
        self.per_participant_total
            .get(participant)
            .copied()
            .unwrap_or(Money::ZERO)
    }

    /// Grand total per meal, rounded half-up; zero when there are no meals.
    pub fn average_per_meal(&self) -> Money {
        self.grand_total
            .split_evenly(self.meal_count())
            .unwrap_or(Money::ZERO)
    }

    /// Participants by owed amount, largest first; ties keep first-seen order.
    pub fn ranked_participants(&self) -> Vec<(&ParticipantId, Money)> {
        let mut ranked: Vec<_> = self
            .per_participant_total
            .iter()
            .map(|(id, total)| (id, *total))
            .collect();
        ranked.sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1));
        ranked
    }
}

/// What one meal adds to an aggregate, kept so partitions can be merged by meal id.
#[derive(Debug, Clone)]
struct MealContribution {
    date: NaiveDate,
    total: Money,
    rounding_drift: Money,
    owed: Vec<(ParticipantId, Money)>,
}

/// Single-pass reduction of meal records into a [`MealAggregate`].
///
/// Accumulators over meal sets can be combined with [`merge`](Self::merge); a meal id
/// present in both is counted once, so the result does not depend on how the meals
/// were partitioned.
#[derive(Debug, Clone, Default)]
pub struct AggregateAccumulator {
    summary: MealAggregate,
    contributions: FxHashMap<MealId, MealContribution>,
}

impl AggregateAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts every listed participant at zero, so roster members who never ate
    /// still show up in the totals.
    pub fn with_participants<'a, I>(participants: I) -> Self
    where
        I: IntoIterator<Item = &'a ParticipantId>,
    {
        let mut accumulator = Self::new();
        for id in participants {
            accumulator.seed(id.clone());
        }
        accumulator
    }

    pub fn apply(&mut self, meal: &MealRecord) {
        if self.contributions.contains_key(&meal.id) {
            tracing::warn!(meal_id = %meal.id, "Meal already aggregated; skipping duplicate");
            return;
        }

        for participant in &meal.participants {
            self.seed(participant.id.clone());
        }
        let total = meal.items_total();
        let contribution = MealContribution {
            date: meal.date,
            total,
            rounding_drift: meal.settlement.rounding_drift(total),
            owed: meal
                .settlement
                .iter()
                .map(|(id, owed)| (id.clone(), owed))
                .collect(),
        };
        self.add(meal.id.clone(), contribution);
    }

    /// Combines two accumulators. Meals already counted here are skipped.
    pub fn merge(mut self, other: AggregateAccumulator) -> Self {
        let AggregateAccumulator {
            summary,
            mut contributions,
        } = other;
        for id in summary.per_participant_total.into_keys() {
            self.seed(id);
        }
        for meal_id in summary.per_meal_total.into_keys() {
            if self.contributions.contains_key(&meal_id) {
                tracing::warn!(meal_id = %meal_id, "Meal present in both partitions; counted once");
                continue;
            }
            if let Some(contribution) = contributions.remove(&meal_id) {
                self.add(meal_id, contribution);
            }
        }
        self
    }

    pub fn into_summary(self) -> MealAggregate {
        self.summary
    }

    fn seed(&mut self, id: ParticipantId) {
        self.summary
            .per_participant_total
            .entry(id)
            .or_insert(Money::ZERO);
    }

    fn add(&mut self, meal_id: MealId, contribution: MealContribution) {
        let summary = &mut self.summary;
        summary.per_meal_total.insert(meal_id.clone(), contribution.total);
        *summary
            .per_date_total
            .entry(contribution.date)
            .or_insert(Money::ZERO) += contribution.total;
        summary.grand_total += contribution.total;
        summary.rounding_drift += contribution.rounding_drift;
        for (id, owed) in &contribution.owed {
            *summary
                .per_participant_total
                .entry(id.clone())
                .or_insert(Money::ZERO) += *owed;
        }
        self.contributions.insert(meal_id, contribution);
    }
}

/// Aggregates meals in one pass.
pub fn aggregate<'a, I>(meals: I) -> MealAggregate
where
    I: IntoIterator<Item = &'a MealRecord>,
{
    let mut accumulator = AggregateAccumulator::new();
    for meal in meals {
        accumulator.apply(meal);
    }
    accumulator.into_summary()
}
