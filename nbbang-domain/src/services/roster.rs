use crate::model::{Participant, ParticipantId};
use fxhash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("meal has no participants")]
    Empty,
    #[error("participant {0} appears twice in the roster")]
    DuplicateParticipant(ParticipantId),
}

/// Lookup over the participants of one meal.
pub struct RosterIndex<'a> {
    ids: FxHashSet<&'a str>,
}

impl<'a> RosterIndex<'a> {
    /// Indexes a roster, rejecting empty rosters and repeated ids.
    pub fn try_new(participants: &'a [Participant]) -> Result<Self, RosterError> {
        if participants.is_empty() {
            return Err(RosterError::Empty);
        }
        let mut ids = FxHashSet::default();
        for participant in participants {
            if !ids.insert(participant.id.as_str()) {
                return Err(RosterError::DuplicateParticipant(participant.id.clone()));
            }
        }
        Ok(Self { ids })
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.ids.contains(id.as_str())
    }
}
