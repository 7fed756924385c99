//! User-facing strings. Korean unless the `en` feature is enabled.

#[cfg(not(feature = "en"))]
pub mod strings {
    pub const PARTICIPANT: &str = "참여자";
    pub const AMOUNT: &str = "금액";
    pub const ITEM: &str = "메뉴";
    pub const PRICE: &str = "가격";
    pub const CONSUMERS: &str = "먹은 사람";
    pub const PER_PERSON: &str = "1인당";
    pub const SHARED: &str = "공용";
    pub const INDIVIDUAL: &str = "개별";
    pub const GUEST: &str = "게스트";
    pub const RANK: &str = "순위";
    pub const DATE: &str = "날짜";
    pub const MEMO: &str = "메모";
    pub const TOTAL: &str = "총액";
    pub const TOTAL_AMOUNT: &str = "총 금액";
    pub const TOTAL_SPENDING: &str = "총 지출";
    pub const AVERAGE_MEAL_COST: &str = "평균 식사비";
    pub const TOTAL_MEAL_COUNT: &str = "총 식사 횟수";
    pub const MEMBER_COUNT: &str = "모임원 수";
    pub const PER_MEMBER_SETTLEMENT: &str = "모임원별 정산";
    pub const ROUNDING_DRIFT: &str = "반올림 차액";
    pub const PERIOD: &str = "기간";
    pub const UNKNOWN: &str = "알 수 없음";
    pub const CURRENCY_SUFFIX: &str = "원";
    pub const NO_MEALS: &str = "아직 식사 기록이 없어요";

    pub const ENTER_ITEM_NAME: &str = "음식 이름을 입력해주세요.";
    pub const ENTER_PRICE: &str = "금액을 입력해주세요.";
    pub const SELECT_CONSUMER: &str = "개별 음식은 먹은 사람을 선택해주세요.";
    pub const SELECT_SHARED_PARTICIPANTS: &str = "공용 음식은 참여자를 선택해주세요.";
    pub const SELECT_RESTAURANT: &str = "음식점을 선택해주세요.";
    pub const ADD_ITEMS: &str = "음식을 추가해주세요.";
    pub const SELECT_PARTICIPANTS: &str = "참여자를 선택해주세요.";
    pub const ENTER_GUEST_NAME: &str = "게스트 이름을 입력해주세요.";
    pub const TOTAL_TOO_LARGE: &str = "총 금액이 너무 큽니다.";
    pub const MEAL_NOT_FOUND: &str = "식사 기록을 찾을 수 없습니다.";
    pub const STORAGE_UNAVAILABLE: &str = "저장에 실패했습니다.";
    pub const SETTLEMENT_FAILED: &str = "정산 계산에 실패했습니다.";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const PARTICIPANT: &str = "Participant";
    pub const AMOUNT: &str = "Amount";
    pub const ITEM: &str = "Item";
    pub const PRICE: &str = "Price";
    pub const CONSUMERS: &str = "Eaten by";
    pub const PER_PERSON: &str = "Per person";
    pub const SHARED: &str = "Shared";
    pub const INDIVIDUAL: &str = "Individual";
    pub const GUEST: &str = "Guest";
    pub const RANK: &str = "Rank";
    pub const DATE: &str = "Date";
    pub const MEMO: &str = "Memo";
    pub const TOTAL: &str = "Total";
    pub const TOTAL_AMOUNT: &str = "Total amount";
    pub const TOTAL_SPENDING: &str = "Total spending";
    pub const AVERAGE_MEAL_COST: &str = "Average per meal";
    pub const TOTAL_MEAL_COUNT: &str = "Meals";
    pub const MEMBER_COUNT: &str = "Members";
    pub const PER_MEMBER_SETTLEMENT: &str = "Per-member settlement";
    pub const ROUNDING_DRIFT: &str = "Rounding difference";
    pub const PERIOD: &str = "Period";
    pub const UNKNOWN: &str = "Unknown";
    pub const CURRENCY_SUFFIX: &str = " KRW";
    pub const NO_MEALS: &str = "No meals recorded yet";

    pub const ENTER_ITEM_NAME: &str = "Please enter the item name.";
    pub const ENTER_PRICE: &str = "Please enter the price.";
    pub const SELECT_CONSUMER: &str = "Please select who ate this item.";
    pub const SELECT_SHARED_PARTICIPANTS: &str = "Please select who shared this item.";
    pub const SELECT_RESTAURANT: &str = "Please select a restaurant.";
    pub const ADD_ITEMS: &str = "Please add at least one item.";
    pub const SELECT_PARTICIPANTS: &str = "Please select the participants.";
    pub const ENTER_GUEST_NAME: &str = "Please enter the guest's name.";
    pub const TOTAL_TOO_LARGE: &str = "The meal total is too large.";
    pub const MEAL_NOT_FOUND: &str = "Meal record not found.";
    pub const STORAGE_UNAVAILABLE: &str = "Failed to save.";
    pub const SETTLEMENT_FAILED: &str = "Settlement calculation failed.";
}

pub use strings::*;

use std::fmt::Display;

#[cfg(not(feature = "en"))]
pub fn item_name_too_long(max: usize) -> String {
    format!("음식 이름은 {max}자 이하로 입력해주세요.")
}

#[cfg(not(feature = "en"))]
pub fn memo_too_long(max: usize) -> String {
    format!("메모는 {max}자 이하로 입력해주세요.")
}

#[cfg(not(feature = "en"))]
pub fn duplicate_consumer(name: impl Display) -> String {
    format!("{name}님이 중복으로 선택되었습니다.")
}

#[cfg(not(feature = "en"))]
pub fn duplicate_participant(name: impl Display) -> String {
    format!("{name}님이 이미 참여자 목록에 있습니다.")
}

#[cfg(not(feature = "en"))]
pub fn unknown_participant(name: impl Display) -> String {
    format!("{name}님은 이번 식사 참여자가 아닙니다.")
}

#[cfg(not(feature = "en"))]
pub fn item_at(position: usize, message: impl Display) -> String {
    format!("{}번째 음식: {message}", position + 1)
}

#[cfg(not(feature = "en"))]
pub fn meal_count(count: usize) -> String {
    format!("{count}회")
}

#[cfg(feature = "en")]
pub fn item_name_too_long(max: usize) -> String {
    format!("Item names can be at most {max} characters.")
}

#[cfg(feature = "en")]
pub fn memo_too_long(max: usize) -> String {
    format!("Memos can be at most {max} characters.")
}

#[cfg(feature = "en")]
pub fn duplicate_consumer(name: impl Display) -> String {
    format!("{name} is selected more than once.")
}

#[cfg(feature = "en")]
pub fn duplicate_participant(name: impl Display) -> String {
    format!("{name} is already a participant.")
}

#[cfg(feature = "en")]
pub fn unknown_participant(name: impl Display) -> String {
    format!("{name} is not a participant of this meal.")
}

#[cfg(feature = "en")]
pub fn item_at(position: usize, message: impl Display) -> String {
    format!("Item {}: {message}", position + 1)
}

#[cfg(feature = "en")]
pub fn meal_count(count: usize) -> String {
    if count == 1 {
        "1 meal".to_string()
    } else {
        format!("{count} meals")
    }
}
