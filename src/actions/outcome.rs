//! Terminal result of a mutation call
//!
//! A mutation either transfers control to the listing location or hands a
//! renderable state back to the form. The two shapes are modeled as one
//! tagged result so callers pattern-match instead of relying on a non-local
//! exit.

use crate::core::error::ActionError;
use crate::core::validation::FieldErrors;
use serde::{Deserialize, Serialize};

/// State handed back to the form for re-rendering.
///
/// `errors` maps form field names to their validation messages; `message`
/// is the headline banner (validation headline, store failure, or delete
/// success).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NextState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NextState {
    /// Initial state with nothing to render
    pub fn empty() -> Self {
        Self::default()
    }

    /// State carrying only a banner message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }

    /// State carrying field errors plus a headline
    pub fn with_errors(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    /// Whether any field error is present
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }
}

impl From<ActionError> for NextState {
    fn from(err: ActionError) -> Self {
        let message = err.message();
        match err {
            ActionError::Validation { errors, .. } => NextState::with_errors(errors, message),
            ActionError::Store { .. } => NextState::message(message),
        }
    }
}

/// Terminal step of every create/update call
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Control leaves the form entirely and lands on the given location
    Redirect(String),

    /// The form re-renders with this state
    State(NextState),
}

impl Outcome {
    /// The redirect target, if this outcome navigates
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Outcome::Redirect(target) => Some(target),
            Outcome::State(_) => None,
        }
    }

    /// The renderable state, if this outcome stays on the form
    pub fn state(&self) -> Option<&NextState> {
        match self {
            Outcome::Redirect(_) => None,
            Outcome::State(state) => Some(state),
        }
    }
}

impl From<ActionError> for Outcome {
    fn from(err: ActionError) -> Self {
        Outcome::State(err.into())
    }
}
