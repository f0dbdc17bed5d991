//! Declarative form schema for the invoice entity
//!
//! The schema validates and types the raw form bag in a single non-throwing
//! pass, collecting every field failure. It covers exactly the user-supplied
//! fields: `customerId`, `amount`, `status`. `id` and `date` are never form
//! fields — the id for update/delete arrives out-of-band from the caller,
//! and the date is derived at create time.

use crate::core::form::FormInput;
use crate::core::invoice::InvoiceStatus;
use crate::core::validation::validators::{identifier, one_of, positive_number};
use indexmap::IndexMap;

/// Form field keys, as submitted
pub const FIELD_CUSTOMER_ID: &str = "customerId";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_STATUS: &str = "status";

/// Per-field user-facing messages
pub const MSG_CUSTOMER_ID: &str = "Please select a customer.";
pub const MSG_AMOUNT: &str = "Please enter an amount greater than $0.";
pub const MSG_STATUS: &str = "Please select an invoice status.";

/// Ordered mapping from form field name to its validation messages.
///
/// Insertion order follows the schema's field order, so rendered errors line
/// up with the form layout. A field may carry several messages.
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// A validated, typed invoice form. The amount is still in major units;
/// conversion to minor units happens in the coercion step.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Schema over the user-suppliable invoice fields.
///
/// The same schema serves create and update; neither operation accepts `id`
/// or `date` from the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceFormSchema;

impl InvoiceFormSchema {
    pub fn new() -> Self {
        Self
    }

    /// Validate and coerce a raw form bag.
    ///
    /// Non-throwing: returns the typed draft or the full map of field
    /// failures. A bag failing several fields reports all of them at once.
    pub fn validate(&self, form: &FormInput) -> Result<InvoiceDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_id = form
            .get_trimmed(FIELD_CUSTOMER_ID)
            .filter(|raw| identifier()(raw).is_ok())
            .map(str::to_string);
        if customer_id.is_none() {
            push_error(&mut errors, FIELD_CUSTOMER_ID, MSG_CUSTOMER_ID);
        }

        let amount = form
            .get_trimmed(FIELD_AMOUNT)
            .filter(|raw| positive_number()(raw).is_ok())
            .and_then(|raw| raw.parse::<f64>().ok());
        if amount.is_none() {
            push_error(&mut errors, FIELD_AMOUNT, MSG_AMOUNT);
        }

        let status = form
            .get_trimmed(FIELD_STATUS)
            .filter(|raw| one_of(InvoiceStatus::allowed_values())(raw).is_ok())
            .and_then(|raw| raw.parse::<InvoiceStatus>().ok());
        if status.is_none() {
            push_error(&mut errors, FIELD_STATUS, MSG_STATUS);
        }

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) => Ok(InvoiceDraft {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
