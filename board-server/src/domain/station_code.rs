//! Station short codes.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A station short code such as `HKI`, `TPE` or `ÄHT`.
///
/// Codes are stored uppercase. Digitraffic codes are usually 2-3 letters,
/// but some contain non-ASCII letters, so only emptiness and whitespace
/// are rejected.
///
/// # Examples
///
/// ```
/// use board_server::domain::StationCode;
///
/// let hki = StationCode::parse("hki").unwrap();
/// assert_eq!(hki.as_str(), "HKI");
///
/// assert!(StationCode::parse("").is_err());
/// assert!(StationCode::parse("H KI").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    /// Parse and normalize a station code.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidStationCode {
                reason: "must not contain whitespace",
            });
        }

        Ok(Self(s.to_uppercase()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parse_uppercases() {
        assert_eq!(StationCode::parse("psl").unwrap().as_str(), "PSL");
        assert_eq!(StationCode::parse("Tpe").unwrap().as_str(), "TPE");
        assert_eq!(StationCode::parse("äht").unwrap().as_str(), "ÄHT");
    }

    #[test]
    fn two_letter_codes_are_valid() {
        assert_eq!(StationCode::parse("KV").unwrap().as_str(), "KV");
    }

    #[test]
    fn reject_empty_and_whitespace() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse(" ").is_err());
        assert!(StationCode::parse("HK I").is_err());
        assert!(StationCode::parse("HKI\n").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("HKI").unwrap();
        assert_eq!(format!("{}", code), "HKI");
        assert_eq!(format!("{:?}", code), "StationCode(HKI)");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(StationCode::parse("HKI").unwrap(), "Helsinki");
        assert_eq!(map.get("HKI"), Some(&"Helsinki"));
        assert_eq!(map.get("hki"), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = StationCode::parse("tku").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"TKU\"");
    }
}
