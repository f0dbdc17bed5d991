//! Derivation of storage-ready fields from validated input
//!
//! Two derived fields exist: the amount converted from user-entered major
//! units to integer minor units, and (create only) the creation date stamped
//! from the current UTC day.

use crate::core::invoice::{InvoiceChanges, NewInvoice};
use crate::core::validation::InvoiceDraft;
use chrono::{NaiveDate, Utc};

/// Convert a major-unit amount (e.g. dollars) to integer minor units (cents).
///
/// Rounding is half-up: `19.99 -> 1999`, `0.005 -> 1`, `1.005 -> 101`.
///
/// A bare `(major * 100.0).round()` misrounds decimal ties, because most of
/// them sit one ULP below the tie in binary (`1.005_f64 * 100.0` is
/// `100.4999…`). The shortest round-trip representation recovers the decimal
/// digits the user actually typed, so the scaling is done on those.
pub fn to_minor_units(major: f64) -> i64 {
    let text = format!("{}", major);
    let unsigned = text.trim_start_matches('-');
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let frac = frac_part.as_bytes();
    let digit = |i: usize| frac.get(i).map(|b| i64::from(b - b'0')).unwrap_or(0);

    let whole: i64 = int_part.parse().unwrap_or(0);
    // Third decimal and beyond: >= 5 means at or past the half-cent, round up
    let carry = if digit(2) >= 5 { 1 } else { 0 };
    let cents = whole * 100 + digit(0) * 10 + digit(1) + carry;

    if text.starts_with('-') { -cents } else { cents }
}

/// The current UTC day, truncated to day granularity.
pub fn current_date() -> NaiveDate {
    Utc::now().date_naive()
}

impl NewInvoice {
    /// Assemble an insert row from a validated draft, stamping `date`.
    ///
    /// The date is computed once by the caller at invocation time; it never
    /// comes from form input.
    pub fn from_draft(draft: InvoiceDraft, date: NaiveDate) -> Self {
        Self {
            customer_id: draft.customer_id,
            amount_minor: to_minor_units(draft.amount),
            status: draft.status,
            date,
        }
    }
}

impl InvoiceChanges {
    /// Assemble an update row from a validated draft. No date: the creation
    /// date is immutable.
    pub fn from_draft(draft: InvoiceDraft) -> Self {
        Self {
            customer_id: draft.customer_id,
            amount_minor: to_minor_units(draft.amount),
            status: draft.status,
        }
    }
}
