#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod labels;
pub mod settlement_presenter;
pub mod statistics_presenter;
pub mod text_table;

pub use error_presenter::format_meal_error;
pub use labels::{Labels, format_money};
pub use settlement_presenter::{MealView, SettlementPresenter};
pub use statistics_presenter::StatisticsPresenter;
pub use text_table::{Alignment, TextTableBuilder};
