//! Numeric channel decoding.
//!
//! Catalog tooling has historically serialized channel values
//! inconsistently: some versions write JSON numbers, others write the
//! same numerals as JSON strings (`0.5` vs `"0.5"`). The decoder accepts
//! both so callers never need to know which tool produced the document.
//!
//! Values are passed through as-is: no clamping to [0, 1], since
//! extended-range color spaces legitimately carry channel values outside
//! that interval.

use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};

/// Decodes a single channel value that may be a native number or a
/// numeral-shaped string.
///
/// `path` identifies the field for error context.
///
/// # Errors
///
/// Returns [`CatalogError::SchemaMismatch`] naming the field path and the
/// raw value when it is neither a valid number nor a parseable decimal
/// string.
pub fn decode(value: &Value, path: &str) -> CatalogResult<f64> {
    if let Some(n) = value.as_f64() {
        return Ok(n);
    }
    if let Some(s) = value.as_str() {
        if let Ok(n) = s.parse::<f64>() {
            return Ok(n);
        }
    }
    Err(CatalogError::schema_mismatch(path, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_and_string_agree() {
        let from_number = decode(&json!(0.5), "red").unwrap();
        let from_string = decode(&json!("0.5"), "red").unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn integer_forms() {
        assert_eq!(decode(&json!(1), "alpha").unwrap(), 1.0);
        assert_eq!(decode(&json!("1"), "alpha").unwrap(), 1.0);
    }

    #[test]
    fn out_of_range_passes_through() {
        assert_eq!(decode(&json!(-0.25), "red").unwrap(), -0.25);
        assert_eq!(decode(&json!("1.75"), "green").unwrap(), 1.75);
    }

    #[test]
    fn non_numeric_string_fails() {
        let err = decode(&json!("not-a-number"), "components.blue").unwrap_err();
        assert!(err.is_schema_mismatch());
        assert_eq!(err.path(), Some("components.blue"));
        assert!(err.to_string().contains("not-a-number"));
    }

    #[test]
    fn wrong_shape_fails() {
        assert!(decode(&json!(true), "alpha").is_err());
        assert!(decode(&json!(null), "alpha").is_err());
        assert!(decode(&json!([0.5]), "alpha").is_err());
    }
}
