use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{LineItem, Money, Participant, Settlement};

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(MealId);
string_id!(GroupId);
string_id!(UserId);

/// Snapshot of the restaurant a meal was eaten at.
///
/// The registry entry may be deleted later; the snapshot keeps the meal readable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantRef {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
}

impl RestaurantRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// One eating event of a group, with its derived settlement.
///
/// `settlement` and `total_amount` are always derived from `items` and
/// `participants`; records are replaced as a whole, never patched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: MealId,
    pub group_id: GroupId,
    pub date: NaiveDate,
    pub restaurant: RestaurantRef,
    pub items: Vec<LineItem>,
    pub participants: Vec<Participant>,
    pub memo: String,
    pub settlement: Settlement,
    pub total_amount: Money,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealRecord {
    /// Sum of item prices, recomputed from the items themselves.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(LineItem::price).sum()
    }

    pub fn rounding_drift(&self) -> Money {
        self.settlement.rounding_drift(self.items_total())
    }
}

/// Inclusive range of meal dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// `None` when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
