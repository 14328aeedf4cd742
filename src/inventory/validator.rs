//! Validation of new items before they enter the store.

use super::item::{NewItem, Unit, UnknownUnit};

/// Reasons a candidate item is rejected.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name, stock or unit left blank
    #[error("Please fill all fields")]
    MissingField,

    /// Stock is not a number, not finite, or not above zero
    #[error("Stock must be a positive number")]
    InvalidStock,

    /// Unit outside the fixed set
    #[error("Unknown unit '{0}', expected one of kg, litre, packets")]
    UnknownUnit(String),
}

/// Check the raw form fields and return a normalized candidate.
///
/// Blank fields are reported before the stock is parsed, and the stock before
/// the unit.
///
pub fn validate(name: &str, stock_text: &str, unit: &str) -> Result<NewItem, ValidationError> {
    let name = name.trim();
    let stock_text = stock_text.trim();
    let unit = unit.trim();

    if name.is_empty() || stock_text.is_empty() || unit.is_empty() {
        return Err(ValidationError::MissingField);
    }

    let stock = parse_stock(stock_text)?;
    let unit: Unit = unit
        .parse()
        .map_err(|UnknownUnit(text)| ValidationError::UnknownUnit(text))?;

    Ok(NewItem {
        name: name.to_string(),
        stock,
        unit,
    })
}

/// Parse the stock as a decimal literal (optional sign, fraction and
/// exponent). Hex literals such as `0x10` are not numbers here, and neither
/// are `inf` or `NaN`.
///
fn parse_stock(text: &str) -> Result<f64, ValidationError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidStock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        assert_eq!(validate("", "10", "kg"), Err(ValidationError::MissingField));
        assert_eq!(validate("   ", "10", "kg"), Err(ValidationError::MissingField));
        assert_eq!(validate("rice", "", "kg"), Err(ValidationError::MissingField));
        assert_eq!(validate("rice", " \t", "kg"), Err(ValidationError::MissingField));
        assert_eq!(validate("rice", "10", ""), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_missing_field_wins_over_bad_stock() {
        assert_eq!(validate("", "abc", "kg"), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_invalid_stock() {
        for text in ["abc", "-5", "0", "0.0", "12kg", "1,5", "inf", "NaN", "1e400", "--1", "0x10"] {
            assert_eq!(
                validate("rice", text, "kg"),
                Err(ValidationError::InvalidStock),
                "stock text {:?}",
                text
            );
        }
    }

    #[test]
    fn test_accepted_stock_forms() {
        for (text, expected) in [("15", 15.0), ("2.5", 2.5), (".5", 0.5), ("1e3", 1000.0), ("+7", 7.0)] {
            let item = validate("rice", text, "kg").unwrap();
            assert_eq!(item.stock, expected);
        }
    }

    #[test]
    fn test_normalizes_candidate() {
        let item = validate("  rice  ", " 15 ", "kg").unwrap();
        assert_eq!(item, NewItem::new("rice", 15.0, Unit::Kg));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            validate("rice", "15", "boxes"),
            Err(ValidationError::UnknownUnit("boxes".to_string()))
        );
        assert_eq!(validate("milk", "2", " litre ").unwrap().unit, Unit::Litre);
        for unit in ["ltr", "KG", "Litre", "PACKETS"] {
            assert_eq!(
                validate("rice", "5", unit),
                Err(ValidationError::UnknownUnit(unit.to_string()))
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::MissingField.to_string(), "Please fill all fields");
        assert_eq!(
            ValidationError::InvalidStock.to_string(),
            "Stock must be a positive number"
        );
        assert!(ValidationError::UnknownUnit("boxes".to_string())
            .to_string()
            .contains("boxes"));
    }
}
