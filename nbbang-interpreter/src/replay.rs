use nbbang_application::{MealService, MealServiceError, ParticipantDirectory};
use nbbang_domain::Participant;
use nbbang_infrastructure::{MealLog, MealLogError, ReplayedMeal};
use nbbang_presentation::{Labels, format_meal_error};
use std::fmt;

/// A log entry the lifecycle manager refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Zero-based meal position in the log.
    pub meal: usize,
    /// Zero-based edit position; `None` for the initial form.
    pub edit: Option<usize>,
    pub message: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.edit {
            Some(edit) => write!(f, "meal #{}, edit #{}: {}", self.meal + 1, edit + 1, self.message),
            None => write!(f, "meal #{}: {}", self.meal + 1, self.message),
        }
    }
}

/// Feeds every logged meal through `service`: create, then each edit, then delete.
///
/// Rejected forms and edits are collected and replay moves on. Structural problems in
/// the log itself abort the replay.
pub fn replay_log(
    log: &MealLog,
    service: &MealService<'_>,
    directory: &dyn ParticipantDirectory,
) -> Result<Vec<Rejection>, MealLogError> {
    let mut rejections = Vec::new();

    for (position, logged) in log.meals.iter().enumerate() {
        let ReplayedMeal { draft, edits } =
            logged.replay(log, position, |name| service.new_guest(name))?;
        let roster = draft.participants.clone();
        let reject = |edit: Option<usize>, err: &MealServiceError| {
            let labels = Labels::new(directory).with_roster(&roster);
            let rejection = Rejection {
                meal: position,
                edit,
                message: format_meal_error(err, &labels),
            };
            tracing::warn!(meal = position, edit = ?edit, error = %err, "Log entry rejected");
            rejection
        };

        let meal_id = match service.create(
            log.group.clone(),
            logged.date,
            logged.actor.clone(),
            draft,
        ) {
            Ok(record) => record.id,
            Err(err) => {
                rejections.push(reject(None, &err));
                continue;
            }
        };

        for (index, changes) in edits.into_iter().enumerate() {
            if let Err(err) = service.update(&meal_id, changes) {
                rejections.push(reject(Some(index), &err));
            }
        }

        if logged.deleted {
            if let Err(err) = service.delete(&meal_id) {
                rejections.push(reject(None, &err));
            }
        }
    }

    tracing::info!(
        meals = log.meals.len(),
        rejected = rejections.len(),
        "Meal log replayed"
    );
    Ok(rejections)
}

/// Every roster snapshot across `meals`, for label fallback.
pub fn rosters<'m>(meals: impl IntoIterator<Item = &'m [Participant]>) -> Vec<Participant> {
    let mut all: Vec<Participant> = Vec::new();
    for roster in meals {
        for participant in roster {
            if !all.iter().any(|seen| seen.id == participant.id) {
                all.push(participant.clone());
            }
        }
    }
    all
}
