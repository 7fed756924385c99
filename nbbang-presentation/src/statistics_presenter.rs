use crate::{
    labels::{Labels, format_money},
    text_table::{Alignment, TextTableBuilder},
};
use nbbang_application::StatisticsReport;
use nbbang_i18n as i18n;
use std::borrow::Cow;

pub struct StatisticsPresenter;

impl StatisticsPresenter {
    pub fn render(report: &StatisticsReport, labels: &Labels<'_>) -> String {
        let mut text = Self::build_overview_table(report);
        text.push('\n');
        text.push_str(i18n::PER_MEMBER_SETTLEMENT);
        text.push('\n');
        text.push_str(&Self::build_ranking_table(report, labels));
        text
    }

    pub fn build_overview_table(report: &StatisticsReport) -> String {
        let summary = &report.summary;
        let period = match (report.first_meal, report.last_meal) {
            (Some(first), Some(last)) if first == last => first.to_string(),
            (Some(first), Some(last)) => format!("{first} ~ {last}"),
            _ => "-".to_string(),
        };

        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::TOTAL_SPENDING),
                Cow::Owned(format_money(summary.grand_total)),
            ])
            .row([
                Cow::Borrowed(i18n::AVERAGE_MEAL_COST),
                Cow::Owned(format_money(summary.average_per_meal())),
            ])
            .row([
                Cow::Borrowed(i18n::TOTAL_MEAL_COUNT),
                Cow::Owned(i18n::meal_count(summary.meal_count())),
            ])
            .row([
                Cow::Borrowed(i18n::MEMBER_COUNT),
                Cow::Owned(report.member_count.to_string()),
            ])
            .row([Cow::Borrowed(i18n::PERIOD), Cow::Owned(period)])
            .build()
    }

    /// Highest spender first.
    pub fn build_ranking_table(report: &StatisticsReport, labels: &Labels<'_>) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Right, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::RANK),
                Cow::Borrowed(i18n::PARTICIPANT),
                Cow::Borrowed(i18n::AMOUNT),
            ]);

        for (rank, (id, total)) in report.summary.ranked_participants().into_iter().enumerate() {
            builder = builder.row([
                Cow::Owned((rank + 1).to_string()),
                labels.participant(id),
                Cow::Owned(format_money(total)),
            ]);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nbbang_domain::{MealAggregate, MealId, Money, ParticipantId};
    use std::collections::HashMap;

    fn report() -> StatisticsReport {
        let mut summary = MealAggregate::default();
        for (id, amount) in [("u1", 5_000), ("u2", 13_000), ("u3", 0)] {
            summary
                .per_participant_total
                .insert(ParticipantId::from(id), Money::from_i64(amount));
        }
        summary
            .per_meal_total
            .insert(MealId::from("m1"), Money::from_i64(9_000));
        summary
            .per_meal_total
            .insert(MealId::from("m2"), Money::from_i64(9_000));
        summary.grand_total = Money::from_i64(18_000);

        StatisticsReport {
            summary,
            member_count: 3,
            first_meal: NaiveDate::from_ymd_opt(2024, 5, 1),
            last_meal: NaiveDate::from_ymd_opt(2024, 5, 20),
        }
    }

    #[test]
    fn overview_shows_totals_average_and_period() {
        let table = StatisticsPresenter::build_overview_table(&report());

        assert!(table.contains(&format_money(Money::from_i64(18_000))));
        assert!(table.contains(&format_money(Money::from_i64(9_000))));
        assert!(table.contains(&i18n::meal_count(2)));
        assert!(table.contains("2024-05-01 ~ 2024-05-20"));
    }

    #[test]
    fn ranking_is_descending_with_labels() {
        let directory: HashMap<ParticipantId, String> = [
            (ParticipantId::from("u1"), "지민".to_string()),
            (ParticipantId::from("u2"), "서연".to_string()),
        ]
        .into_iter()
        .collect();
        let labels = Labels::new(&directory);

        let table = StatisticsPresenter::build_ranking_table(&report(), &labels);
        let rows: Vec<&str> = table.lines().skip(2).collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("서연"));
        assert!(rows[1].contains("지민"));
        assert!(rows[2].contains(i18n::UNKNOWN));
    }
}
