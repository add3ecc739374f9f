//! Interpretation of agent replies
//!
//! - [`parsing`]: thought / speech / addressee extraction
//! - [`introduction`]: self-identification detection

pub mod introduction;
pub mod parsing;

pub use introduction::IntroductionDetector;
pub use parsing::{Addressee, ParsedReply, parse_reply};
