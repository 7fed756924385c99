mod support;

use chrono::NaiveDate;
use nbbang_application::{
    MealChanges, MealDraft, MealService, MealServiceError, MealValidationError, RepositoryError,
};
use nbbang_domain::{
    DateRange, GroupId, ItemDraft, MealId, MealRecord, Money, Participant, ParticipantId,
    RestaurantRef, UserId,
};
use rstest::{fixture, rstest};
use support::{RecordingRepository, SequentialIds, TickingClock};

struct Env {
    repository: RecordingRepository,
    ids: SequentialIds,
    clock: TickingClock,
}

impl Env {
    fn service(&self) -> MealService<'_> {
        MealService::new(&self.repository, &self.ids, &self.clock)
    }

    fn record(&self, day: u32, items: Vec<ItemDraft>) -> MealRecord {
        self.service()
            .create(group(), date(day), UserId::from("u1"), draft(items))
            .expect("meal")
    }
}

#[fixture]
fn env() -> Env {
    Env {
        repository: RecordingRepository::default(),
        ids: SequentialIds::default(),
        clock: TickingClock::default(),
    }
}

fn group() -> GroupId {
    GroupId::from("g1")
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date")
}

fn draft(items: Vec<ItemDraft>) -> MealDraft {
    MealDraft {
        restaurant: Some(RestaurantRef::new("r1", "김밥천국")),
        items,
        participants: vec![
            Participant::member("A", "지민"),
            Participant::member("B", "서연"),
            Participant::member("C", "도윤"),
        ],
        memo: String::new(),
    }
}

#[rstest]
fn create_persists_the_computed_record(env: Env) {
    let record = env.record(
        1,
        vec![ItemDraft::shared("탕수육", "30000", ["A", "B", "C"])],
    );

    assert_eq!(env.repository.put_count(), 1);
    assert_eq!(env.repository.stored(), vec![record.clone()]);
    for id in ["A", "B", "C"] {
        assert_eq!(record.settlement.owed_by(&id.into()), Money::from_i64(10_000));
    }
}

#[rstest]
fn rejected_form_never_reaches_repository(env: Env) {
    let err = env
        .service()
        .create(group(), date(1), UserId::from("u1"), draft(vec![]))
        .expect_err("no items");

    assert_eq!(err, MealServiceError::Validation(MealValidationError::NoItems));
    assert_eq!(env.repository.put_count(), 0);
    assert!(env.repository.stored().is_empty());
}

#[rstest]
fn repository_failure_propagates_unchanged(env: Env) {
    env.repository.go_down();
    let err = env
        .service()
        .create(
            group(),
            date(1),
            UserId::from("u1"),
            draft(vec![ItemDraft::individual("김밥", "3000", "A")]),
        )
        .expect_err("storage down");

    assert_eq!(
        err,
        MealServiceError::Repository(RepositoryError::Unavailable("connection refused".into()))
    );
}

#[rstest]
fn update_replaces_stored_record(env: Env) {
    let stored = env.record(1, vec![ItemDraft::individual("김밥", "3000", "A")]);
    let updated = env
        .service()
        .update(
            &stored.id,
            MealChanges::items(vec![ItemDraft::individual("라볶이", "5000", "B")]),
        )
        .expect("update");

    assert_eq!(env.repository.put_count(), 2);
    assert_eq!(env.repository.stored(), vec![updated.clone()]);
    assert_eq!(updated.settlement.owed_by(&"A".into()), Money::ZERO);
    assert_eq!(updated.settlement.owed_by(&"B".into()), Money::from_i64(5_000));
}

#[rstest]
fn invalid_update_leaves_stored_record(env: Env) {
    let stored = env.record(1, vec![ItemDraft::individual("김밥", "3000", "B")]);
    let err = env
        .service()
        .update(
            &stored.id,
            MealChanges::participants(vec![Participant::member("A", "지민")]),
        )
        .expect_err("dangling consumer");

    assert!(matches!(
        err,
        MealServiceError::Validation(MealValidationError::InvalidItem { position: 0, .. })
    ));
    assert_eq!(env.repository.put_count(), 1);
    assert_eq!(env.repository.stored(), vec![stored]);
}

#[rstest]
fn updating_missing_meal_is_not_found(env: Env) {
    let missing = MealId::from("meal_404");
    assert_eq!(
        env.service().update(&missing, MealChanges::memo("x")),
        Err(MealServiceError::Repository(RepositoryError::NotFound {
            meal: missing.clone()
        }))
    );
}

#[rstest]
fn delete_is_terminal(env: Env) {
    let stored = env.record(1, vec![ItemDraft::individual("김밥", "3000", "A")]);
    env.service().delete(&stored.id).expect("delete");

    assert!(env.repository.stored().is_empty());
    assert!(matches!(
        env.service().delete(&stored.id),
        Err(MealServiceError::Repository(RepositoryError::NotFound { .. }))
    ));
}

#[rstest]
fn summaries_filter_by_day_and_range(env: Env) {
    env.record(1, vec![ItemDraft::shared("보쌈", "10000", ["A", "B"])]);
    env.record(
        2,
        vec![
            ItemDraft::individual("국밥", "3000", "A"),
            ItemDraft::individual("냉면", "7000", "C"),
        ],
    );
    env.record(9, vec![ItemDraft::individual("돈까스", "9000", "B")]);

    let day = env.service().day_summary(&group(), date(1)).expect("day");
    assert_eq!(day.grand_total, Money::from_i64(10_000));
    assert_eq!(day.meal_count(), 1);

    let range = DateRange::new(date(1), date(2)).expect("range");
    let summary = env.service().range_summary(&group(), range).expect("range");
    assert_eq!(summary.grand_total, Money::from_i64(20_000));
    assert_eq!(summary.participant_total(&"A".into()), Money::from_i64(8_000));
    assert_eq!(summary.participant_total(&"B".into()), Money::from_i64(5_000));
    assert_eq!(summary.participant_total(&"C".into()), Money::from_i64(7_000));

    let meals = env.service().meals_between(&group(), range).expect("meals");
    assert_eq!(meals.len(), 2);
    assert!(
        env.service()
            .meals_on(&GroupId::from("other"), date(1))
            .expect("meals")
            .is_empty()
    );
}

#[rstest]
fn group_statistics_cover_whole_history(env: Env) {
    env.record(1, vec![ItemDraft::individual("국밥", "9000", "A")]);
    env.record(20, vec![ItemDraft::individual("국밥", "9000", "B")]);
    let roster: Vec<ParticipantId> = ["A", "B", "C", "D"].into_iter().map(Into::into).collect();

    let report = env
        .service()
        .group_statistics(&group(), &roster)
        .expect("statistics");

    assert_eq!(report.member_count, 4);
    assert_eq!(report.summary.meal_count(), 2);
    assert_eq!(report.summary.grand_total, Money::from_i64(18_000));
    assert_eq!(report.summary.average_per_meal(), Money::from_i64(9_000));
    assert_eq!(report.summary.participant_total(&"D".into()), Money::ZERO);
    assert!(
        report
            .summary
            .per_participant_total
            .contains_key(&ParticipantId::from("D"))
    );
    assert_eq!(report.first_meal, Some(date(1)));
    assert_eq!(report.last_meal, Some(date(20)));
}
