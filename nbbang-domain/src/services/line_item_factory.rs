use crate::{
    model::{ConsumptionDraft, ItemDraft, ItemId, LineItem, Money, ParticipantId},
    services::RosterIndex,
};
use fxhash::FxHashSet;

pub const DEFAULT_MAX_ITEM_NAME_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemValidationError {
    #[error("item name is empty")]
    EmptyName,
    #[error("item name is longer than {max} characters")]
    NameTooLong { max: usize },
    #[error("price must be a positive whole amount no larger than {}", Money::MAX_PRICE)]
    InvalidPrice,
    #[error("individual item has no consumer selected")]
    NoConsumerSelected,
    #[error("shared item has no participants selected")]
    NoParticipantsSelected,
    #[error("participant {0} is selected twice")]
    DuplicateConsumer(ParticipantId),
    #[error("participant {0} is not part of this meal")]
    UnknownParticipant(ParticipantId),
}

/// Turns form drafts into validated line items for one meal roster.
pub struct LineItemFactory<'r, 'a> {
    roster: &'r RosterIndex<'a>,
    max_name_chars: usize,
}

impl<'r, 'a> LineItemFactory<'r, 'a> {
    pub fn new(roster: &'r RosterIndex<'a>) -> Self {
        Self {
            roster,
            max_name_chars: DEFAULT_MAX_ITEM_NAME_CHARS,
        }
    }

    pub fn with_max_name_chars(mut self, max_name_chars: usize) -> Self {
        self.max_name_chars = max_name_chars;
        self
    }

    /// Validates `draft` and builds the item.
    ///
    /// `fresh_id` is only called when the draft does not carry an id of its own, so
    /// edited items keep their identity across recomputes.
    pub fn build<F>(&self, draft: ItemDraft, fresh_id: F) -> Result<LineItem, ItemValidationError>
    where
        F: FnOnce() -> ItemId,
    {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if name.chars().count() > self.max_name_chars {
            return Err(ItemValidationError::NameTooLong {
                max: self.max_name_chars,
            });
        }

        let price = match Money::parse_input(&draft.price) {
            Ok(price) if price.is_positive() && price <= Money::MAX_PRICE => price,
            _ => return Err(ItemValidationError::InvalidPrice),
        };

        let name = name.to_string();
        match draft.consumption {
            ConsumptionDraft::Individual { consumer } => {
                let consumer = consumer
                    .filter(|id| !id.as_str().trim().is_empty())
                    .ok_or(ItemValidationError::NoConsumerSelected)?;
                self.ensure_known(&consumer)?;
                let id = draft.id.unwrap_or_else(fresh_id);
                Ok(LineItem::individual(id, name, price, consumer))
            }
            ConsumptionDraft::Shared { consumers } => {
                if consumers.is_empty() {
                    return Err(ItemValidationError::NoParticipantsSelected);
                }
                let mut seen = FxHashSet::default();
                for consumer in &consumers {
                    if !seen.insert(consumer.as_str()) {
                        return Err(ItemValidationError::DuplicateConsumer(consumer.clone()));
                    }
                    self.ensure_known(consumer)?;
                }
                let id = draft.id.unwrap_or_else(fresh_id);
                Ok(LineItem::shared(id, name, price, consumers))
            }
        }
    }

    fn ensure_known(&self, id: &ParticipantId) -> Result<(), ItemValidationError> {
        if self.roster.contains(id) {
            Ok(())
        } else {
            Err(ItemValidationError::UnknownParticipant(id.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Consumption, Participant};
    use rstest::{fixture, rstest};

    #[fixture]
    fn roster() -> Vec<Participant> {
        vec![
            Participant::member("a", "지민"),
            Participant::member("b", "서연"),
            Participant::regular("c", "부장님"),
        ]
    }

    fn build(roster: &[Participant], draft: ItemDraft) -> Result<LineItem, ItemValidationError> {
        let index = RosterIndex::try_new(roster).expect("roster");
        LineItemFactory::new(&index).build(draft, || ItemId::from("fresh"))
    }

    #[rstest]
    #[case::blank_name(ItemDraft::individual("   ", "8000", "a"), ItemValidationError::EmptyName)]
    #[case::zero_price(ItemDraft::individual("김밥", "0", "a"), ItemValidationError::InvalidPrice)]
    #[case::text_price(ItemDraft::individual("김밥", "삼천원", "a"), ItemValidationError::InvalidPrice)]
    #[case::blank_price(ItemDraft::individual("김밥", "", "a"), ItemValidationError::InvalidPrice)]
    #[case::above_max_price(
        ItemDraft::individual("김밥", "10,000,000,001", "a"),
        ItemValidationError::InvalidPrice
    )]
    #[case::i64_max_price(
        ItemDraft::individual("김밥", i64::MAX.to_string(), "a"),
        ItemValidationError::InvalidPrice
    )]
    #[case::negative_price(ItemDraft::individual("김밥", "-3000", "a"), ItemValidationError::InvalidPrice)]
    #[case::no_consumer(
        ItemDraft {
            id: None,
            name: "김밥".into(),
            price: "3000".into(),
            consumption: ConsumptionDraft::Individual { consumer: None },
        },
        ItemValidationError::NoConsumerSelected
    )]
    #[case::blank_consumer(ItemDraft::individual("김밥", "3000", ""), ItemValidationError::NoConsumerSelected)]
    #[case::no_participants(
        ItemDraft::shared("탕수육", "30000", Vec::<&str>::new()),
        ItemValidationError::NoParticipantsSelected
    )]
    #[case::duplicate_consumer(
        ItemDraft::shared("탕수육", "30000", ["a", "b", "a"]),
        ItemValidationError::DuplicateConsumer("a".into())
    )]
    #[case::unknown_individual(
        ItemDraft::individual("김밥", "3000", "zz"),
        ItemValidationError::UnknownParticipant("zz".into())
    )]
    #[case::unknown_shared(
        ItemDraft::shared("탕수육", "30000", ["a", "zz"]),
        ItemValidationError::UnknownParticipant("zz".into())
    )]
    fn rejects_invalid_drafts(
        roster: Vec<Participant>,
        #[case] draft: ItemDraft,
        #[case] expected: ItemValidationError,
    ) {
        assert_eq!(build(&roster, draft), Err(expected));
    }

    #[rstest]
    fn rejects_names_over_limit(roster: Vec<Participant>) {
        let index = RosterIndex::try_new(&roster).expect("roster");
        let factory = LineItemFactory::new(&index).with_max_name_chars(3);
        let result = factory.build(ItemDraft::individual("짜장면곱빼기", "7000", "a"), || {
            ItemId::from("fresh")
        });
        assert_eq!(result, Err(ItemValidationError::NameTooLong { max: 3 }));
    }

    #[rstest]
    fn shared_item_gets_fresh_id_and_split(roster: Vec<Participant>) {
        let item = build(&roster, ItemDraft::shared(" 탕수육 ", "30,000", ["a", "b", "c"]))
            .expect("valid item");

        assert_eq!(item.id().as_str(), "fresh");
        assert_eq!(item.name(), "탕수육");
        assert_eq!(item.price(), Money::from_i64(30_000));
        assert_eq!(item.split_amount(), Some(Money::from_i64(10_000)));
    }

    #[rstest]
    fn accepts_price_at_the_limit(roster: Vec<Participant>) {
        let item = build(&roster, ItemDraft::individual("코스 요리", "10,000,000,000", "a"))
            .expect("valid item");
        assert_eq!(item.price(), Money::MAX_PRICE);
    }

    #[rstest]
    fn existing_id_is_kept(roster: Vec<Participant>) {
        let draft = ItemDraft::individual("김치찌개", "8000", "b").with_id(ItemId::from("item_7"));
        let item = build(&roster, draft).expect("valid item");

        assert_eq!(item.id().as_str(), "item_7");
        assert_eq!(
            item.consumption(),
            &Consumption::Individual {
                consumer: "b".into()
            }
        );
    }

    #[rstest]
    fn fresh_id_is_not_requested_for_invalid_drafts(roster: Vec<Participant>) {
        let index = RosterIndex::try_new(&roster).expect("roster");
        let result = LineItemFactory::new(&index).build(ItemDraft::individual("", "1", "a"), || {
            panic!("id generated for rejected draft")
        });
        assert_eq!(result, Err(ItemValidationError::EmptyName));
    }
}
