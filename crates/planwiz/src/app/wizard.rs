//! Owner of the wizard answers for the scope step.

use crate::domain::model::{FieldUpdate, WizardData};

/// Message shown when the step is confirmed without a scope.
pub const SCOPE_REQUIRED: &str = "Please select a scope";

/// Holds the wizard answers and the step's validation error.
///
/// Components only ever see a shared borrow of the data; every change comes
/// back through [`WizardFlow::update_field`].
#[derive(Debug, Clone, Default)]
pub struct WizardFlow {
    data: WizardData,
    error: Option<String>,
}

impl WizardFlow {
    pub fn new(data: WizardData) -> Self {
        Self { data, error: None }
    }

    pub fn data(&self) -> &WizardData {
        &self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_data(self) -> WizardData {
        self.data
    }

    /// Apply an update from a component and drop any stale error.
    pub fn update_field(&mut self, update: FieldUpdate) {
        tracing::info!(field = update.field().as_str(), ?update, "wizard field updated");
        self.data.apply(update);
        self.error = None;
    }

    /// Validate the scope step. On failure the error is kept for display.
    pub fn confirm(&mut self) -> bool {
        match self.data.scope {
            Some(scope) => {
                tracing::info!(%scope, "scope step confirmed");
                self.error = None;
                true
            }
            None => {
                tracing::debug!("scope step confirmed without a selection");
                self.error = Some(SCOPE_REQUIRED.to_owned());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::model::Scope;

    #[test]
    fn confirm_requires_scope() {
        let mut flow = WizardFlow::default();
        assert!(!flow.confirm());
        assert_eq!(flow.error(), Some(SCOPE_REQUIRED));
    }

    #[test]
    fn update_clears_error_and_allows_confirm() {
        let mut flow = WizardFlow::default();
        flow.confirm();
        flow.update_field(FieldUpdate::Scope(Scope::Course));
        assert_eq!(flow.error(), None);
        assert!(flow.confirm());
        assert_eq!(flow.into_data().scope, Some(Scope::Course));
    }
}
