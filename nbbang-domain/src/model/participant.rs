use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a participant comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantKind {
    /// Registered app user.
    Member,
    /// Person tracked by the group without an account.
    Regular,
    /// Ad hoc diner; the id is generated per meal and never reused.
    Guest,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub kind: ParticipantKind,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>, kind: ParticipantKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn member(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ParticipantKind::Member)
    }

    pub fn regular(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ParticipantKind::Regular)
    }

    pub fn guest(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ParticipantKind::Guest)
    }

    pub fn is_guest(&self) -> bool {
        self.kind == ParticipantKind::Guest
    }
}
