use crate::model::{Consumption, ItemId, LineItem, Money, Participant, ParticipantId, Settlement};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    #[error("item {item} references participant {participant} outside the meal roster")]
    UnknownParticipant {
        item: ItemId,
        participant: ParticipantId,
    },
    #[error("shared item {item} has no consumers")]
    NoConsumers { item: ItemId },
}

/// Settlement calculation service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Computes what every participant owes for one meal.
    ///
    /// Individual items charge their full price to the sole consumer; shared items charge
    /// the stored `split_amount` to each consumer, so the settlement always agrees with
    /// the split shown next to the item. Rounding remainders are not redistributed.
    ///
    /// # Arguments
    /// * `items` - Validated line items of the meal
    /// * `participants` - Full meal roster; every participant appears in the result
    ///
    /// # Errors
    /// Any consumer id outside the roster, or a shared item without consumers, fails
    /// the whole calculation instead of being skipped.
    pub fn calculate(
        &self,
        items: &[LineItem],
        participants: &[Participant],
    ) -> Result<Settlement, SettlementError> {
        let mut settlement = Settlement::zeroed(participants.iter().map(|p| &p.id));

        for item in items {
            match item.consumption() {
                Consumption::Individual { consumer } => {
                    Self::charge(&mut settlement, item, consumer, item.price())?;
                }
                Consumption::Shared {
                    consumers,
                    split_amount,
                } => {
                    if consumers.is_empty() {
                        return Err(SettlementError::NoConsumers {
                            item: item.id().clone(),
                        });
                    }
                    for consumer in consumers {
                        Self::charge(&mut settlement, item, consumer, *split_amount)?;
                    }
                }
            }
        }

        let items_total: Money = items.iter().map(LineItem::price).sum();
        let drift = settlement.rounding_drift(items_total);
        tracing::debug!(
            item_count = items.len(),
            participant_count = participants.len(),
            items_total = items_total.amount(),
            rounding_drift = drift.amount(),
            "Settlement calculated"
        );
        if !drift.is_zero() {
            tracing::debug!(
                rounding_drift = drift.amount(),
                "Shared splits do not add up to the item total; remainder left unassigned"
            );
        }

        Ok(settlement)
    }

    fn charge(
        settlement: &mut Settlement,
        item: &LineItem,
        consumer: &ParticipantId,
        amount: Money,
    ) -> Result<(), SettlementError> {
        if settlement.charge(consumer, amount) {
            Ok(())
        } else {
            tracing::error!(
                item = %item.id(),
                participant = %consumer,
                "Settlement rejected: consumer is not in the meal roster"
            );
            Err(SettlementError::UnknownParticipant {
                item: item.id().clone(),
                participant: consumer.clone(),
            })
        }
    }
}
