use crate::{
    labels::{Labels, format_money},
    text_table::{Alignment, TextTableBuilder},
};
use nbbang_application::ParticipantDirectory;
use nbbang_domain::{LineItem, MealAggregate, MealRecord, Money, ParticipantId};
use nbbang_i18n as i18n;
use std::borrow::Cow;

pub struct SettlementPresenter;

pub struct MealView {
    pub header: String,
    pub items_table: String,
    pub settlement_table: String,
    /// Present only when shared splits did not add up to the item total.
    pub drift_note: Option<String>,
}

impl MealView {
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n{}\n{}", self.header, self.items_table, self.settlement_table);
        if let Some(note) = &self.drift_note {
            text.push_str(note);
            text.push('\n');
        }
        text
    }
}

impl SettlementPresenter {
    pub fn render_meal(meal: &MealRecord, directory: &dyn ParticipantDirectory) -> MealView {
        let labels = Labels::new(directory).with_roster(&meal.participants);
        MealView {
            header: Self::meal_header(meal),
            items_table: Self::build_items_table(&meal.items, &labels),
            settlement_table: Self::build_settlement_table(
                meal.settlement.iter(),
                meal.settlement.total(),
                &labels,
            ),
            drift_note: drift_note(meal.rounding_drift()),
        }
    }

    /// Per-participant totals over many meals, in first-seen order.
    pub fn render_aggregate(summary: &MealAggregate, labels: &Labels<'_>) -> String {
        if summary.meal_count() == 0 {
            return format!("{}\n", i18n::NO_MEALS);
        }
        let mut text = Self::build_settlement_table(
            summary
                .per_participant_total
                .iter()
                .map(|(id, total)| (id, *total)),
            summary.grand_total,
            labels,
        );
        if let Some(note) = drift_note(summary.rounding_drift) {
            text.push_str(&note);
            text.push('\n');
        }
        text
    }

    /// Item totals per day, oldest first; only days with meals are listed.
    pub fn build_daily_table(summary: &MealAggregate) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::DATE), Cow::Borrowed(i18n::TOTAL_AMOUNT)]);

        for (date, total) in &summary.per_date_total {
            builder = builder.row([Cow::Owned(date.to_string()), Cow::Owned(format_money(*total))]);
        }

        builder.build()
    }

    fn meal_header(meal: &MealRecord) -> String {
        let restaurant = Labels::restaurant(&meal.restaurant);
        let mut header = match &meal.restaurant.category {
            Some(category) => format!("{} {restaurant} ({category})", meal.date),
            None => format!("{} {restaurant}", meal.date),
        };
        header.push_str(&format!(
            " | {} {}\n",
            i18n::TOTAL_AMOUNT,
            format_money(meal.total_amount)
        ));
        if !meal.memo.is_empty() {
            header.push_str(&format!("{}: {}\n", i18n::MEMO, meal.memo));
        }
        header
    }

    pub fn build_items_table(items: &[LineItem], labels: &Labels<'_>) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::ITEM),
                Cow::Borrowed(i18n::PRICE),
                Cow::Borrowed(i18n::CONSUMERS),
                Cow::Borrowed(i18n::PER_PERSON),
            ]);

        for item in items {
            let (kind, per_person) = match item.split_amount() {
                Some(split) => (i18n::SHARED, split),
                None => (i18n::INDIVIDUAL, item.price()),
            };
            let consumers = item
                .consumers()
                .iter()
                .map(|id| labels.participant(id))
                .collect::<Vec<_>>()
                .join(", ");
            builder = builder.row([
                Cow::Borrowed(item.name()),
                Cow::Owned(format_money(item.price())),
                Cow::Owned(format!("{kind} {consumers}")),
                Cow::Owned(format_money(per_person)),
            ]);
        }

        builder.build()
    }

    pub fn build_settlement_table<'r, I>(owed: I, total: Money, labels: &Labels<'_>) -> String
    where
        I: IntoIterator<Item = (&'r ParticipantId, Money)>,
    {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::PARTICIPANT), Cow::Borrowed(i18n::AMOUNT)]);

        for (id, amount) in owed {
            builder = builder.row([labels.participant(id), Cow::Owned(format_money(amount))]);
        }
        builder = builder.row([Cow::Borrowed(i18n::TOTAL), Cow::Owned(format_money(total))]);

        builder.build()
    }
}

fn drift_note(drift: Money) -> Option<String> {
    (!drift.is_zero()).then(|| format!("{}: {}", i18n::ROUNDING_DRIFT, format_money(drift)))
}
