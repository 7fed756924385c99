use fxhash::FxHashMap;
use nbbang_application::ParticipantDirectory;
use nbbang_domain::{Money, Participant, ParticipantId, RestaurantRef};
use nbbang_i18n as i18n;
use std::borrow::Cow;

/// `12,000원`
pub fn format_money(amount: Money) -> String {
    format!("{}{}", amount.grouped(), i18n::CURRENCY_SUFFIX)
}

/// Resolves display labels for participants that may no longer exist.
///
/// Lookup order: the identity directory, then names captured in meal rosters, then a
/// fixed "unknown" label. Guests are marked as such.
pub struct Labels<'a> {
    directory: &'a dyn ParticipantDirectory,
    snapshots: FxHashMap<&'a ParticipantId, &'a Participant>,
}

struct EmptyDirectory;

impl ParticipantDirectory for EmptyDirectory {
    fn display_name(&self, _participant: &ParticipantId) -> Option<&str> {
        None
    }
}

static EMPTY_DIRECTORY: EmptyDirectory = EmptyDirectory;

impl<'a> Labels<'a> {
    pub fn new(directory: &'a dyn ParticipantDirectory) -> Self {
        Self {
            directory,
            snapshots: FxHashMap::default(),
        }
    }

    /// Labels from roster snapshots only.
    pub fn snapshots_only() -> Self {
        Self::new(&EMPTY_DIRECTORY)
    }

    /// Remembers roster names; the first snapshot seen for an id wins.
    pub fn with_roster(mut self, roster: &'a [Participant]) -> Self {
        for participant in roster {
            self.snapshots.entry(&participant.id).or_insert(participant);
        }
        self
    }

    pub fn participant(&self, id: &ParticipantId) -> Cow<'a, str> {
        if let Some(name) = self.directory.display_name(id) {
            return Cow::Borrowed(name);
        }
        match self.snapshots.get(id).copied() {
            Some(participant) if participant.is_guest() => {
                Cow::Owned(format!("{} ({})", participant.name, i18n::GUEST))
            }
            Some(participant) if !participant.name.trim().is_empty() => {
                Cow::Borrowed(participant.name.as_str())
            }
            _ => Cow::Borrowed(i18n::UNKNOWN),
        }
    }

    pub fn restaurant(restaurant: &RestaurantRef) -> Cow<'_, str> {
        let name = restaurant.name.trim();
        if name.is_empty() {
            Cow::Borrowed(i18n::UNKNOWN)
        } else {
            Cow::Borrowed(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn prefers_directory_then_snapshot_then_unknown() {
        let mut directory = HashMap::new();
        directory.insert(ParticipantId::from("u1"), "지민 (현재 이름)".to_string());
        let roster = vec![
            Participant::member("u1", "지민"),
            Participant::member("u2", "퇴사한 서연"),
        ];
        let labels = Labels::new(&directory).with_roster(&roster);

        assert_eq!(labels.participant(&"u1".into()), "지민 (현재 이름)");
        assert_eq!(labels.participant(&"u2".into()), "퇴사한 서연");
        assert_eq!(labels.participant(&"u3".into()), i18n::UNKNOWN);
    }

    #[test]
    fn guests_are_marked() {
        let roster = vec![Participant::guest("guest_1", "민수 친구")];
        let labels = Labels::snapshots_only().with_roster(&roster);
        assert_eq!(
            labels.participant(&"guest_1".into()),
            format!("민수 친구 ({})", i18n::GUEST)
        );
    }

    #[test]
    fn blank_restaurant_name_falls_back() {
        let restaurant = RestaurantRef::new("r1", " ");
        assert_eq!(Labels::restaurant(&restaurant), i18n::UNKNOWN);
    }

    #[test]
    fn money_has_grouping_and_suffix() {
        assert_eq!(
            format_money(Money::from_i64(1_234_567)),
            format!("1,234,567{}", i18n::CURRENCY_SUFFIX)
        );
    }
}
