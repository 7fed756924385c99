use crate::{
    error::{MealServiceError, MealValidationError},
    model::{MealChanges, MealDraft, MealPolicy},
    ports::{Clock, IdGenerator},
};
use chrono::NaiveDate;
use nbbang_domain::{
    GroupId, ItemDraft, LineItem, LineItemFactory, MealRecord, Money, Participant, RestaurantRef,
    RosterIndex, Settlement, SettlementCalculator, UserId,
};

/// Fields recomputed whenever items or participants change.
struct Derived {
    items: Vec<LineItem>,
    participants: Vec<Participant>,
    settlement: Settlement,
    total_amount: Money,
}

/// Validates meal forms and derives every computed field of a [`MealRecord`].
///
/// Inputs are never mutated; each call returns a freshly assembled record for the
/// caller to persist.
#[derive(Clone, Copy)]
pub struct MealLifecycle<'a> {
    ids: &'a dyn IdGenerator,
    clock: &'a dyn Clock,
    policy: MealPolicy,
}

impl<'a> MealLifecycle<'a> {
    pub fn new(ids: &'a dyn IdGenerator, clock: &'a dyn Clock) -> Self {
        Self {
            ids,
            clock,
            policy: MealPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MealPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates a submitted meal form and builds the record.
    ///
    /// Checks run in form order: restaurant, items present, memo, roster, then every
    /// item. The first failure aborts the whole create.
    pub fn create(
        &self,
        group_id: GroupId,
        date: NaiveDate,
        actor: UserId,
        draft: MealDraft,
    ) -> Result<MealRecord, MealServiceError> {
        let restaurant = Self::validate_restaurant(draft.restaurant)?;
        if draft.items.is_empty() {
            return Err(MealValidationError::NoItems.into());
        }
        let memo = self.validate_memo(&draft.memo)?;
        let Derived {
            items,
            participants,
            settlement,
            total_amount,
        } = self.derive(draft.items, draft.participants)?;

        let now = self.clock.now();
        let record = MealRecord {
            id: self.ids.meal_id(),
            group_id,
            date,
            restaurant,
            items,
            participants,
            memo,
            settlement,
            total_amount,
            created_by: actor,
            created_at: now,
            updated_at: now,
        };
        tracing::debug!(
            meal_id = %record.id,
            group_id = %record.group_id,
            item_count = record.items.len(),
            participant_count = record.participants.len(),
            total = record.total_amount.amount(),
            "Meal record assembled"
        );
        Ok(record)
    }

    /// Applies `changes` to a stored meal and recomputes it from scratch.
    ///
    /// When the roster changes without new items, the stored items are turned back into
    /// drafts and validated against the new roster, so an item whose consumer left the
    /// meal is rejected instead of silently dropped.
    pub fn update(
        &self,
        existing: &MealRecord,
        changes: MealChanges,
    ) -> Result<MealRecord, MealServiceError> {
        let memo = match &changes.memo {
            Some(memo) => self.validate_memo(memo)?,
            None => existing.memo.clone(),
        };

        let mut updated = existing.clone();
        if changes.items.is_some() || changes.participants.is_some() {
            let drafts = changes
                .items
                .unwrap_or_else(|| existing.items.iter().map(LineItem::to_draft).collect());
            if drafts.is_empty() {
                return Err(MealValidationError::NoItems.into());
            }
            let participants = changes
                .participants
                .unwrap_or_else(|| existing.participants.clone());
            let derived = self.derive(drafts, participants)?;
            updated.items = derived.items;
            updated.participants = derived.participants;
            updated.settlement = derived.settlement;
            updated.total_amount = derived.total_amount;
        }
        updated.memo = memo;
        updated.updated_at = self.clock.now();

        tracing::debug!(
            meal_id = %updated.id,
            total = updated.total_amount.amount(),
            "Meal record recomputed"
        );
        Ok(updated)
    }

    /// Creates an ad hoc participant for one meal.
    pub fn new_guest(&self, name: &str) -> Result<Participant, MealValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MealValidationError::EmptyGuestName);
        }
        Ok(Participant::guest(self.ids.guest_id(), name))
    }

    fn derive(
        &self,
        drafts: Vec<ItemDraft>,
        participants: Vec<Participant>,
    ) -> Result<Derived, MealServiceError> {
        let items = {
            let roster = RosterIndex::try_new(&participants).map_err(MealValidationError::from)?;
            let factory =
                LineItemFactory::new(&roster).with_max_name_chars(self.policy.max_item_name_chars);
            drafts
                .into_iter()
                .enumerate()
                .map(|(position, draft)| {
                    factory
                        .build(draft, || self.ids.item_id())
                        .map_err(|source| {
                            tracing::debug!(position, error = %source, "Item rejected");
                            MealValidationError::InvalidItem { position, source }
                        })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let total_amount = Money::checked_sum(items.iter().map(LineItem::price))
            .ok_or(MealValidationError::TotalTooLarge)?;
        let settlement = SettlementCalculator.calculate(&items, &participants)?;
        Ok(Derived {
            items,
            participants,
            settlement,
            total_amount,
        })
    }

    fn validate_restaurant(
        restaurant: Option<RestaurantRef>,
    ) -> Result<RestaurantRef, MealValidationError> {
        match restaurant {
            Some(restaurant)
                if !restaurant.id.trim().is_empty() && !restaurant.name.trim().is_empty() =>
            {
                Ok(restaurant)
            }
            _ => Err(MealValidationError::NoRestaurant),
        }
    }

    fn validate_memo(&self, memo: &str) -> Result<String, MealValidationError> {
        let memo = memo.trim();
        if memo.chars().count() > self.policy.max_memo_chars {
            return Err(MealValidationError::MemoTooLong {
                max: self.policy.max_memo_chars,
            });
        }
        Ok(memo.to_string())
    }
}
