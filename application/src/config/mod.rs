//! Application-level configuration.
//!
//! - [`RoomConfig`]: roster, language, turn budget and agent timeout for one game

pub mod room_config;

pub use room_config::{DEFAULT_TURNS, RoomConfig};
