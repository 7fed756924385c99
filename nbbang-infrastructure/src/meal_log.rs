//! JSON meal log: a group's members plus the meals recorded for it, in entry order.
//!
//! ```json
//! {
//!   "group": "lunch-club",
//!   "members": [{ "id": "u1", "name": "지민" }, { "id": "u9", "name": "민수", "departed": true }],
//!   "meals": [{
//!     "date": "2024-05-01",
//!     "actor": "u1",
//!     "restaurant": { "id": "r1", "name": "홍콩반점", "category": "중식" },
//!     "participants": ["u1", "u9"],
//!     "guests": [{ "alias": "friend", "name": "민수 친구" }],
//!     "items": [
//!       { "name": "짜장면", "price": 7000, "consumer": "u1" },
//!       { "name": "탕수육", "price": "30,000", "shared": ["u1", "u9", "friend"] }
//!     ],
//!     "memo": "월례 회식"
//!   }]
//! }
//! ```
//!
//! Guest aliases are local to their meal and replaced by freshly generated guest ids.
//! Every declared guest joins the initial roster; an edit's `participants` list names
//! guests by alias to keep them. Departed members still resolve for rosters but are
//! left out of the directory.

use chrono::NaiveDate;
use indexmap::IndexMap;
use nbbang_application::{MealChanges, MealDraft, MealValidationError};
use nbbang_domain::{
    ConsumptionDraft, GroupId, ItemDraft, Participant, ParticipantId, ParticipantKind,
    RestaurantRef, UserId,
};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum MealLogError {
    #[error("failed to read meal log {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed meal log: {0}")]
    Json(#[from] serde_json::Error),
    #[error("meal #{meal} lists participant {participant} who is not a group member")]
    UnknownMember { meal: usize, participant: String },
    #[error("meal #{meal} declares guest alias {alias} twice")]
    DuplicateGuestAlias { meal: usize, alias: String },
    #[error("meal #{meal}: {source}")]
    Guest {
        meal: usize,
        #[source]
        source: MealValidationError,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealLog {
    pub group: GroupId,
    #[serde(default)]
    pub members: Vec<MemberEntry>,
    #[serde(default)]
    pub meals: Vec<LoggedMeal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberEntry {
    pub id: ParticipantId,
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: ParticipantKind,
    #[serde(default)]
    pub departed: bool,
}

fn default_kind() -> ParticipantKind {
    ParticipantKind::Member
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggedMeal {
    pub date: NaiveDate,
    pub actor: UserId,
    pub restaurant: Option<RestaurantRef>,
    #[serde(default)]
    pub participants: Vec<ParticipantId>,
    #[serde(default)]
    pub guests: Vec<GuestEntry>,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    #[serde(default)]
    pub memo: String,
    /// Later edits, applied in order after the meal is created.
    #[serde(default)]
    pub edits: Vec<LoggedEdit>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuestEntry {
    pub alias: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub price: PriceEntry,
    #[serde(default)]
    pub consumer: Option<String>,
    #[serde(default)]
    pub shared: Option<Vec<String>>,
}

/// Prices may be logged as numbers or as form text such as `"12,000"`.
///
/// Floats pass through as their shortest decimal text, so `7000.0` reads as `7000`
/// and a fractional amount fails price validation like any other malformed input.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceEntry {
    Number(i64),
    Float(f64),
    Text(String),
}

impl PriceEntry {
    fn as_input(&self) -> String {
        match self {
            PriceEntry::Number(value) => value.to_string(),
            PriceEntry::Float(value) => value.to_string(),
            PriceEntry::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggedEdit {
    #[serde(default)]
    pub participants: Option<Vec<ParticipantId>>,
    #[serde(default)]
    pub items: Option<Vec<ItemEntry>>,
    #[serde(default)]
    pub memo: Option<String>,
}

impl MealLog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MealLogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| MealLogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let log = Self::parse(&raw)?;
        tracing::info!(
            path = %path.display(),
            group = %log.group,
            members = log.members.len(),
            meals = log.meals.len(),
            "Meal log loaded"
        );
        Ok(log)
    }

    pub fn parse(raw: &str) -> Result<Self, MealLogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Display names of current members; departed members are omitted.
    pub fn directory(&self) -> HashMap<ParticipantId, String> {
        self.members
            .iter()
            .filter(|member| !member.departed)
            .map(|member| (member.id.clone(), member.name.clone()))
            .collect()
    }

    /// Ids of current members, in log order.
    pub fn current_roster(&self) -> Vec<ParticipantId> {
        self.members
            .iter()
            .filter(|member| !member.departed)
            .map(|member| member.id.clone())
            .collect()
    }

    fn member(&self, id: &ParticipantId) -> Option<Participant> {
        self.members
            .iter()
            .find(|member| &member.id == id)
            .map(|member| Participant::new(member.id.clone(), member.name.clone(), member.kind))
    }
}

/// Resolves one meal's participant references into roster entries.
struct MealScope<'l> {
    log: &'l MealLog,
    meal: usize,
    guests: IndexMap<String, Participant>,
}

impl<'l> MealScope<'l> {
    fn new<G>(
        log: &'l MealLog,
        meal: usize,
        entries: &[GuestEntry],
        mut new_guest: G,
    ) -> Result<Self, MealLogError>
    where
        G: FnMut(&str) -> Result<Participant, MealValidationError>,
    {
        let mut guests = IndexMap::with_capacity(entries.len());
        for entry in entries {
            if guests.contains_key(&entry.alias) {
                return Err(MealLogError::DuplicateGuestAlias {
                    meal,
                    alias: entry.alias.clone(),
                });
            }
            let guest =
                new_guest(&entry.name).map_err(|source| MealLogError::Guest { meal, source })?;
            guests.insert(entry.alias.clone(), guest);
        }
        Ok(Self { log, meal, guests })
    }

    fn roster(
        &self,
        ids: &[ParticipantId],
        all_guests: bool,
    ) -> Result<Vec<Participant>, MealLogError> {
        let mut roster = Vec::with_capacity(ids.len() + self.guests.len());
        for id in ids {
            if let Some(guest) = self.guests.get(id.as_str()) {
                if !all_guests {
                    roster.push(guest.clone());
                }
                continue;
            }
            let member = self
                .log
                .member(id)
                .ok_or_else(|| MealLogError::UnknownMember {
                    meal: self.meal,
                    participant: id.to_string(),
                })?;
            roster.push(member);
        }
        if all_guests {
            roster.extend(self.guests.values().cloned());
        }
        Ok(roster)
    }

    fn consumer(&self, reference: &str) -> ParticipantId {
        self.guests
            .get(reference)
            .map(|guest| guest.id.clone())
            .unwrap_or_else(|| ParticipantId::from(reference))
    }

    fn item(&self, entry: &ItemEntry) -> ItemDraft {
        let price = entry.price.as_input();
        match &entry.shared {
            Some(consumers) => ItemDraft::shared(
                entry.name.as_str(),
                price,
                consumers.iter().map(|reference| self.consumer(reference)),
            ),
            None => ItemDraft {
                id: None,
                name: entry.name.clone(),
                price,
                consumption: ConsumptionDraft::Individual {
                    consumer: entry.consumer.as_deref().map(|c| self.consumer(c)),
                },
            },
        }
    }

    fn items(&self, entries: &[ItemEntry]) -> Vec<ItemDraft> {
        entries.iter().map(|entry| self.item(entry)).collect()
    }
}

/// Meal form and follow-up edits rebuilt from one log entry.
#[derive(Debug, Clone)]
pub struct ReplayedMeal {
    pub draft: MealDraft,
    pub edits: Vec<MealChanges>,
}

impl LoggedMeal {
    /// Rebuilds the meal form, creating guests through `new_guest`.
    ///
    /// Item consumers are passed through as written; validating them against the roster
    /// is left to the lifecycle manager.
    pub fn replay<G>(
        &self,
        log: &MealLog,
        position: usize,
        new_guest: G,
    ) -> Result<ReplayedMeal, MealLogError>
    where
        G: FnMut(&str) -> Result<Participant, MealValidationError>,
    {
        let scope = MealScope::new(log, position, &self.guests, new_guest)?;
        let draft = MealDraft {
            restaurant: self.restaurant.clone(),
            items: scope.items(&self.items),
            participants: scope.roster(&self.participants, true)?,
            memo: self.memo.clone(),
        };
        let edits = self
            .edits
            .iter()
            .map(|edit| {
                Ok(MealChanges {
                    items: edit.items.as_deref().map(|items| scope.items(items)),
                    participants: edit
                        .participants
                        .as_deref()
                        .map(|ids| scope.roster(ids, false))
                        .transpose()?,
                    memo: edit.memo.clone(),
                })
            })
            .collect::<Result<Vec<_>, MealLogError>>()?;

        Ok(ReplayedMeal { draft, edits })
    }
}
