use nbbang_domain::{ItemDraft, Participant, RestaurantRef, services::DEFAULT_MAX_ITEM_NAME_CHARS};

pub const DEFAULT_MAX_MEMO_CHARS: usize = 100;

/// Meal form as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDraft {
    pub restaurant: Option<RestaurantRef>,
    pub items: Vec<ItemDraft>,
    pub participants: Vec<Participant>,
    pub memo: String,
}

/// Edit of a stored meal. `None` leaves the field as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealChanges {
    pub items: Option<Vec<ItemDraft>>,
    pub participants: Option<Vec<Participant>>,
    pub memo: Option<String>,
}

impl MealChanges {
    pub fn items(items: Vec<ItemDraft>) -> Self {
        Self {
            items: Some(items),
            ..Self::default()
        }
    }

    pub fn participants(participants: Vec<Participant>) -> Self {
        Self {
            participants: Some(participants),
            ..Self::default()
        }
    }

    pub fn memo(memo: impl Into<String>) -> Self {
        Self {
            memo: Some(memo.into()),
            ..Self::default()
        }
    }
}

/// Input limits of the meal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealPolicy {
    pub max_memo_chars: usize,
    pub max_item_name_chars: usize,
}

impl Default for MealPolicy {
    fn default() -> Self {
        Self {
            max_memo_chars: DEFAULT_MAX_MEMO_CHARS,
            max_item_name_chars: DEFAULT_MAX_ITEM_NAME_CHARS,
        }
    }
}
