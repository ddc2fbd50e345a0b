//! Domain-specific errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown scope '{0}' (expected lesson, unit, or course)")]
    UnknownScope(String),
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("unknown icon set '{0}'")]
    UnknownIconSet(String),
}
