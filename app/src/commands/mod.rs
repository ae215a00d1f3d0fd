//! Command handlers.

pub mod lookup;
