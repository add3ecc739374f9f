//! Participant entity

use super::persona::Persona;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable participant identifier (`p1`, `p2`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for the seat at `index` (zero-based) in the roster
    pub fn for_seat(index: usize) -> Self {
        Self(format!("p{}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One seat in the room
///
/// Knowledge of other participants' names is asymmetric: `a` knows `b`'s
/// name only after `b` has introduced themself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub persona: Persona,
    pub introduced: bool,
    /// participant id → name this participant has learned for them
    pub known_identities: BTreeMap<ParticipantId, String>,
    pub votes: u32,
    pub voted_for: Option<ParticipantId>,
}

impl Participant {
    pub fn new(id: ParticipantId, persona: Persona) -> Self {
        Self {
            id,
            persona,
            introduced: false,
            known_identities: BTreeMap::new(),
            votes: 0,
            voted_for: None,
        }
    }

    pub fn real_name(&self) -> &str {
        &self.persona.real_name
    }

    /// Name everybody sees: appearance until introduced, real name after
    pub fn display_name(&self) -> &str {
        if self.introduced {
            &self.persona.real_name
        } else {
            &self.persona.appearance
        }
    }

    /// How this participant currently refers to `other`
    pub fn name_for<'a>(&'a self, other: &'a Participant) -> &'a str {
        self.known_identities
            .get(&other.id)
            .map(String::as_str)
            .unwrap_or(&other.persona.appearance)
    }

    pub fn knows(&self, other: &ParticipantId) -> bool {
        self.known_identities.contains_key(other)
    }

    pub fn has_voted(&self) -> bool {
        self.voted_for.is_some()
    }

    pub(crate) fn learn_identity(&mut self, other: &ParticipantId, name: &str) {
        self.known_identities
            .entry(other.clone())
            .or_insert_with(|| name.to_string());
    }
}
