use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Money, ParticipantId};

/// Per-participant owed amounts for one meal, in roster order.
///
/// Equality is map equality; insertion order is kept only for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settlement {
    owed: IndexMap<ParticipantId, Money>,
}

impl Settlement {
    /// Every listed participant starts at zero.
    pub fn zeroed<'a, I>(participants: I) -> Self
    where
        I: IntoIterator<Item = &'a ParticipantId>,
    {
        Self {
            owed: participants
                .into_iter()
                .map(|id| (id.clone(), Money::ZERO))
                .collect(),
        }
    }

    /// Adds `amount` to a tracked participant. Returns `false` when the id is not tracked.
    pub fn charge(&mut self, participant: &ParticipantId, amount: Money) -> bool {
        match self.owed.get_mut(participant) {
            Some(owed) => {
                *owed += amount;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, participant: &ParticipantId) -> Option<Money> {
        self.owed.get(participant).copied()
    }

    /// Owed amount, zero for participants not in this settlement.
    pub fn owed_by(&self, participant: &ParticipantId) -> Money {
        self.get(participant).unwrap_or(Money::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, Money)> + '_ {
        self.owed.iter().map(|(id, owed)| (id, *owed))
    }

    pub fn len(&self) -> usize {
        self.owed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owed.is_empty()
    }

    pub fn total(&self) -> Money {
        self.owed.values().sum()
    }

    /// `items_total - Σ owed`: the units lost (positive) or gained (negative) by
    /// rounding shared splits. Zero whenever every split divides evenly.
    pub fn rounding_drift(&self, items_total: Money) -> Money {
        items_total - self.total()
    }
}

impl FromIterator<(ParticipantId, Money)> for Settlement {
    fn from_iter<T: IntoIterator<Item = (ParticipantId, Money)>>(iter: T) -> Self {
        Self {
            owed: iter.into_iter().collect(),
        }
    }
}
