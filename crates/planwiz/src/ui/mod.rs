//! Terminal UI: theming, components, and the interactive wizard loop.

pub mod app;
pub mod components;
pub mod icons;
pub mod theme;
