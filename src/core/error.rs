//! Typed error handling for the mutation pipeline
//!
//! Two failure classes exist at the pipeline boundary:
//!
//! - [`ActionError::Validation`]: one or more form fields failed the schema;
//!   carries the field-keyed error map plus a generic headline.
//! - [`ActionError::Store`]: the persistence call failed. Underlying store
//!   detail is deliberately not carried here — it is logged at the call site
//!   and callers see only the fixed, operation-specific headline.
//!
//! A zero-row match on update or delete is not an error at any layer.

use crate::core::validation::FieldErrors;
use std::fmt;

/// Which mutation a failure belongs to. Selects the headline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    /// Headline for a validation failure of this mutation
    pub fn missing_fields_message(&self) -> &'static str {
        match self {
            MutationKind::Create => "Missing Fields. Failed to Create Invoice.",
            MutationKind::Update => "Missing Fields. Failed to Update Invoice.",
            MutationKind::Delete => "Missing Fields. Failed to Delete Invoice.",
        }
    }

    /// Headline for a store failure of this mutation
    pub fn store_failure_message(&self) -> &'static str {
        match self {
            MutationKind::Create => "Database Error: Failed to Create Invoice.",
            MutationKind::Update => "Database Error: Failed to Update Invoice.",
            MutationKind::Delete => "Database Error: Failed to Delete Invoice.",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Create => write!(f, "create"),
            MutationKind::Update => write!(f, "update"),
            MutationKind::Delete => write!(f, "delete"),
        }
    }
}

/// Success banner returned by a completed delete
pub const MSG_DELETED_INVOICE: &str = "Deleted Invoice";

/// A mutation failure, recovered locally and surfaced as form state
#[derive(Debug, Clone, PartialEq)]
pub enum ActionError {
    /// Schema validation failed; no store access was attempted
    Validation {
        kind: MutationKind,
        errors: FieldErrors,
    },

    /// The store call failed; detail stays in the logs
    Store { kind: MutationKind },
}

impl ActionError {
    /// The user-facing headline for this failure
    pub fn message(&self) -> &'static str {
        match self {
            ActionError::Validation { kind, .. } => kind.missing_fields_message(),
            ActionError::Store { kind } => kind.store_failure_message(),
        }
    }

    /// The field error map, when validation failed
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ActionError::Validation { errors, .. } => Some(errors),
            ActionError::Store { .. } => None,
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ActionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_messages_are_operation_specific() {
        assert_eq!(
            MutationKind::Create.store_failure_message(),
            "Database Error: Failed to Create Invoice."
        );
        assert_eq!(
            MutationKind::Update.store_failure_message(),
            "Database Error: Failed to Update Invoice."
        );
        assert_eq!(
            MutationKind::Delete.store_failure_message(),
            "Database Error: Failed to Delete Invoice."
        );
    }

    #[test]
    fn test_missing_fields_messages() {
        assert_eq!(
            MutationKind::Create.missing_fields_message(),
            "Missing Fields. Failed to Create Invoice."
        );
        assert_eq!(
            MutationKind::Update.missing_fields_message(),
            "Missing Fields. Failed to Update Invoice."
        );
    }

    #[test]
    fn test_validation_error_exposes_field_map() {
        let mut errors = FieldErrors::new();
        errors.insert("amount".to_string(), vec!["bad".to_string()]);
        let err = ActionError::Validation {
            kind: MutationKind::Create,
            errors,
        };
        assert!(err.field_errors().is_some());
        assert_eq!(err.to_string(), "Missing Fields. Failed to Create Invoice.");
    }

    #[test]
    fn test_store_error_has_no_field_map() {
        let err = ActionError::Store {
            kind: MutationKind::Delete,
        };
        assert!(err.field_errors().is_none());
        assert_eq!(err.message(), "Database Error: Failed to Delete Invoice.");
    }
}
