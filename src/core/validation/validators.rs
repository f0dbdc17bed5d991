//! Reusable field validators
//!
//! Validators operate on raw form strings and return `Ok(())` or a short
//! reason. User-facing messages are attached by the schema, not here.

use regex::Regex;
use std::sync::OnceLock;

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid identifier regex"))
}

/// Validator: value is a non-empty identifier (letters, digits, `_`, `-`)
pub fn identifier() -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    |value: &str| {
        if identifier_regex().is_match(value) {
            Ok(())
        } else {
            Err(format!("'{}' is not a valid identifier", value))
        }
    }
}

/// Validator: value parses as a number strictly greater than zero
pub fn positive_number() -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    |value: &str| match value.trim().parse::<f64>() {
        Ok(n) if n > 0.0 && n.is_finite() => Ok(()),
        Ok(n) => Err(format!("{} is not greater than zero", n)),
        Err(_) => Err(format!("'{}' is not a number", value)),
    }
}

/// Validator: value is exactly one of the allowed strings
pub fn one_of(
    allowed: &'static [&'static str],
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| {
        if allowed.contains(&value) {
            Ok(())
        } else {
            Err(format!("'{}' is not one of {:?}", value, allowed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === identifier() ===

    #[test]
    fn test_identifier_accepts_alphanumeric() {
        let v = identifier();
        assert!(v("c1").is_ok());
        assert!(v("customer_42").is_ok());
        assert!(v("3958dc9e-712f-4377-85e9-fec4b6a6442a").is_ok());
    }

    #[test]
    fn test_identifier_rejects_empty() {
        let v = identifier();
        assert!(v("").is_err());
    }

    #[test]
    fn test_identifier_rejects_whitespace_and_symbols() {
        let v = identifier();
        assert!(v("c 1").is_err());
        assert!(v("c;drop table").is_err());
        assert!(v("  ").is_err());
    }

    // === positive_number() ===

    #[test]
    fn test_positive_number_accepts_decimals() {
        let v = positive_number();
        assert!(v("19.99").is_ok());
        assert!(v("0.005").is_ok());
        assert!(v("50").is_ok());
    }

    #[test]
    fn test_positive_number_rejects_zero_and_negative() {
        let v = positive_number();
        assert!(v("0").is_err());
        assert!(v("-5").is_err());
        assert!(v("-0.01").is_err());
    }

    #[test]
    fn test_positive_number_rejects_non_numeric() {
        let v = positive_number();
        assert!(v("").is_err());
        assert!(v("abc").is_err());
        assert!(v("12abc").is_err());
    }

    #[test]
    fn test_positive_number_rejects_non_finite() {
        let v = positive_number();
        assert!(v("inf").is_err());
        assert!(v("NaN").is_err());
    }

    #[test]
    fn test_positive_number_tolerates_surrounding_whitespace() {
        let v = positive_number();
        assert!(v(" 19.99 ").is_ok());
    }

    // === one_of() ===

    #[test]
    fn test_one_of_accepts_listed_value() {
        let v = one_of(&["pending", "paid"]);
        assert!(v("pending").is_ok());
        assert!(v("paid").is_ok());
    }

    #[test]
    fn test_one_of_rejects_unlisted_value() {
        let v = one_of(&["pending", "paid"]);
        assert!(v("overdue").is_err());
        assert!(v("Pending").is_err());
        assert!(v("").is_err());
    }
}
