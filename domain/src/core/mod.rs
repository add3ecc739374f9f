//! Core domain concepts shared across all subdomains.
//!
//! - [`language::Language`]: language-specific markers and phrases
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: text helpers used by the interpreter and formatters

pub mod error;
pub mod language;
pub mod string;
