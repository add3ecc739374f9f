//! Prompt domain
//!
//! Templates for the persona system prompt, the per-action situational
//! context, the vote ballot and the fan-out delivery messages.

mod template;

pub use template::{CONTEXT_EVENT_WINDOW, PromptTemplate};
