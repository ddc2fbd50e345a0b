//! Collection of reusable TUI components.

pub mod scope_selector;
