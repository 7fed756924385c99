use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Money, ParticipantId};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who ate an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Consumption {
    /// One consumer owes the full price.
    Individual { consumer: ParticipantId },
    /// Every consumer owes `split_amount`, derived from the price and the consumer count.
    Shared {
        consumers: Vec<ParticipantId>,
        split_amount: Money,
    },
}

/// One purchased menu entry of a meal.
///
/// Only constructible through [`LineItem::individual`] / [`LineItem::shared`] (or
/// deserialization of a stored record), so a freshly built item always carries a
/// split amount that matches its price and consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: ItemId,
    name: String,
    price: Money,
    #[serde(flatten)]
    consumption: Consumption,
}

impl LineItem {
    pub fn individual(id: ItemId, name: String, price: Money, consumer: ParticipantId) -> Self {
        Self {
            id,
            name,
            price,
            consumption: Consumption::Individual { consumer },
        }
    }

    /// Builds a shared item and derives its split amount.
    ///
    /// An empty consumer list yields a zero split; such items are rejected by item
    /// validation and by the settlement calculator.
    pub fn shared(id: ItemId, name: String, price: Money, consumers: Vec<ParticipantId>) -> Self {
        let split_amount = price.split_evenly(consumers.len()).unwrap_or(Money::ZERO);
        Self {
            id,
            name,
            price,
            consumption: Consumption::Shared {
                consumers,
                split_amount,
            },
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn consumption(&self) -> &Consumption {
        &self.consumption
    }

    pub fn consumers(&self) -> &[ParticipantId] {
        match &self.consumption {
            Consumption::Individual { consumer } => std::slice::from_ref(consumer),
            Consumption::Shared { consumers, .. } => consumers,
        }
    }

    /// Stored per-consumer share of a shared item.
    pub fn split_amount(&self) -> Option<Money> {
        match &self.consumption {
            Consumption::Individual { .. } => None,
            Consumption::Shared { split_amount, .. } => Some(*split_amount),
        }
    }

    /// What one consumer owes for this item; zero for non-consumers.
    pub fn charge_for(&self, participant: &ParticipantId) -> Money {
        match &self.consumption {
            Consumption::Individual { consumer } if consumer == participant => self.price,
            Consumption::Shared {
                consumers,
                split_amount,
            } if consumers.contains(participant) => *split_amount,
            _ => Money::ZERO,
        }
    }

    /// Form input that reproduces this item, keeping its id.
    pub fn to_draft(&self) -> ItemDraft {
        let name = self.name.as_str();
        let price = self.price.to_string();
        let draft = match &self.consumption {
            Consumption::Individual { consumer } => {
                ItemDraft::individual(name, price, consumer.clone())
            }
            Consumption::Shared { consumers, .. } => {
                ItemDraft::shared(name, price, consumers.iter().cloned())
            }
        };
        draft.with_id(self.id.clone())
    }
}

/// Unvalidated item as typed into the meal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDraft {
    /// Present when editing an item that already exists in the meal.
    pub id: Option<ItemId>,
    pub name: String,
    pub price: String,
    pub consumption: ConsumptionDraft,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsumptionDraft {
    Individual { consumer: Option<ParticipantId> },
    Shared { consumers: Vec<ParticipantId> },
}

impl ItemDraft {
    pub fn individual(
        name: impl Into<String>,
        price: impl Into<String>,
        consumer: impl Into<ParticipantId>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            price: price.into(),
            consumption: ConsumptionDraft::Individual {
                consumer: Some(consumer.into()),
            },
        }
    }

    pub fn shared<I, P>(name: impl Into<String>, price: impl Into<String>, consumers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantId>,
    {
        Self {
            id: None,
            name: name.into(),
            price: price.into(),
            consumption: ConsumptionDraft::Shared {
                consumers: consumers.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }
}
