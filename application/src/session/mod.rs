//! Agent session ownership and single-flight access

mod slot;

pub use slot::SessionSlot;
