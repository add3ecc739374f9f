//! Voting: reply interpretation and the unanimity rule

pub mod resolver;
pub mod tally;

pub use resolver::{VoteChoice, VoteMatch, resolve_vote};
pub use tally::{GameOutcome, VoteTally};
