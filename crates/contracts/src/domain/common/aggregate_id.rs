use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
///
/// Identifiers in this system are human-readable reference codes
/// (`RN001`, `BK042`), so unlike numeric keys they are not `Copy`.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Parse an id taken from user input (URL path, form field).
    /// Surrounding whitespace is dropped; a blank value is rejected.
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Minimum number of digits in a reference code (`RN001`)
const REFERENCE_DIGITS: usize = 3;

/// Build a reference code from a prefix and a sequence number.
///
/// ```
/// use contracts::domain::common::format_reference;
/// assert_eq!(format_reference("BK", 7), "BK007");
/// assert_eq!(format_reference("RN", 1234), "RN1234");
/// ```
pub fn format_reference(prefix: &str, number: u32) -> String {
    format!("{}{:0width$}", prefix, number, width = REFERENCE_DIGITS)
}

/// Extract the sequence number from a reference code with the given prefix.
/// Returns `None` for codes that do not follow the `<prefix><digits>` shape.
pub fn parse_reference(prefix: &str, code: &str) -> Option<u32> {
    let digits = code.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference("BK", "BK001"), Some(1));
        assert_eq!(parse_reference("BK", "BK1000"), Some(1000));
        assert_eq!(parse_reference("BK", "RN001"), None);
        assert_eq!(parse_reference("BK", "BK"), None);
        assert_eq!(parse_reference("BK", "BK-12"), None);
    }
}
