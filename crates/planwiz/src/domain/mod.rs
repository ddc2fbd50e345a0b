//! Domain types for the planning wizard.

pub mod catalog;
pub mod errors;
pub mod model;
