//! Application layer orchestrating wizard state.

pub mod wizard;
