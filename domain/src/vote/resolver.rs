//! Vote reply interpretation
//!
//! Pure text matching, no I/O. The order of checks is fixed:
//!
//! 1. self-reference (sentinel word or the voter's own real name) wins;
//! 2. otherwise the first other candidate, in registry order, whose real
//!    name or appearance keyword appears in the reply;
//! 3. otherwise the voter votes for themself.

use crate::core::language::Language;
use crate::core::string::words;
use crate::participant::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};

/// How a vote reply was matched to a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteMatch {
    /// Reply referred to the voter (sentinel word or own name)
    SelfReference,
    /// Reply named another candidate
    Candidate,
    /// Nothing matched; the vote defaults to the voter
    FallbackToSelf,
}

/// Resolved vote of one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteChoice {
    pub voter: ParticipantId,
    pub candidate: ParticipantId,
    pub matched: VoteMatch,
}

impl VoteChoice {
    pub fn is_self_vote(&self) -> bool {
        self.voter == self.candidate
    }
}

fn refers_to_self(reply_lower: &str, reply_words: &[String], voter: &Participant) -> bool {
    if reply_lower.contains(&voter.real_name().to_lowercase()) {
        return true;
    }
    Language::ALL.iter().any(|language| {
        language
            .self_vote_sentinels()
            .iter()
            .any(|s| reply_words.iter().any(|w| w == s))
    })
}

fn refers_to(reply_lower: &str, candidate: &Participant) -> bool {
    if reply_lower.contains(&candidate.real_name().to_lowercase()) {
        return true;
    }
    candidate
        .persona
        .appearance_keyword()
        .is_some_and(|k| reply_lower.contains(&k))
}

/// Interpret a vote reply from `voter` against the registry `candidates`.
///
/// Deterministic for a given reply string.
///
/// # Examples
///
/// ```
/// use room_domain::{Participant, ParticipantId, Persona, VoteMatch, resolve_vote};
///
/// let roster: Vec<Participant> = Persona::default_roster(Default::default())
///     .into_iter()
///     .enumerate()
///     .map(|(i, p)| Participant::new(ParticipantId::for_seat(i), p))
///     .collect();
///
/// let choice = resolve_vote("Ника", &roster[0], &roster);
/// assert_eq!(choice.candidate.as_str(), "p2");
///
/// let choice = resolve_vote("Голосую за себя, не за Нику", &roster[0], &roster);
/// assert_eq!(choice.matched, VoteMatch::SelfReference);
/// ```
pub fn resolve_vote(reply: &str, voter: &Participant, candidates: &[Participant]) -> VoteChoice {
    let lower = reply.to_lowercase();
    let reply_words = words(reply);

    let (candidate, matched) = if refers_to_self(&lower, &reply_words, voter) {
        (voter.id.clone(), VoteMatch::SelfReference)
    } else if let Some(other) = candidates
        .iter()
        .filter(|c| c.id != voter.id)
        .find(|c| refers_to(&lower, c))
    {
        (other.id.clone(), VoteMatch::Candidate)
    } else {
        (voter.id.clone(), VoteMatch::FallbackToSelf)
    };

    VoteChoice {
        voter: voter.id.clone(),
        candidate,
        matched,
    }
}
