//! Label types returned by the classifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Manufacturer of the host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Manufacturer {
    Apple,
    Google,
    Microsoft,
    Linux,
    /// No known vendor token was found.
    Other,
}

impl Manufacturer {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Manufacturer::Apple => "Apple",
            Manufacturer::Google => "Google",
            Manufacturer::Microsoft => "Microsoft",
            Manufacturer::Linux => "Linux",
            Manufacturer::Other => "Other",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "apple" => Some(Manufacturer::Apple),
            "google" => Some(Manufacturer::Google),
            "microsoft" => Some(Manufacturer::Microsoft),
            "linux" => Some(Manufacturer::Linux),
            "other" => Some(Manufacturer::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Device platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Mobile,
    Tablet,
    /// Anything that matched no device signature.
    Desktop,
}

impl Platform {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mobile => "Mobile",
            Platform::Tablet => "Tablet",
            Platform::Desktop => "Desktop",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mobile" => Some(Platform::Mobile),
            "tablet" => Some(Platform::Tablet),
            "desktop" => Some(Platform::Desktop),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Both labels for a single User-Agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub manufacturer: Manufacturer,
    pub platform: Platform,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manufacturer_as_str() {
        assert_eq!(Manufacturer::Apple.as_str(), "Apple");
        assert_eq!(Manufacturer::Google.as_str(), "Google");
        assert_eq!(Manufacturer::Microsoft.as_str(), "Microsoft");
        assert_eq!(Manufacturer::Linux.as_str(), "Linux");
        assert_eq!(Manufacturer::Other.as_str(), "Other");
    }

    #[test]
    fn test_manufacturer_from_str() {
        assert_eq!(Manufacturer::from_str("apple"), Some(Manufacturer::Apple));
        assert_eq!(Manufacturer::from_str("MICROSOFT"), Some(Manufacturer::Microsoft));
        assert_eq!(Manufacturer::from_str("samsung"), None);
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!(Platform::from_str("Tablet"), Some(Platform::Tablet));
        assert_eq!(Platform::from_str("desktop"), Some(Platform::Desktop));
        assert_eq!(Platform::from_str("watch"), None);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Platform::Mobile.to_string(), "Mobile");
        assert_eq!(Manufacturer::Google.to_string(), "Google");
    }

    #[test]
    fn test_classification_serializes_labels() {
        let c = Classification {
            manufacturer: Manufacturer::Apple,
            platform: Platform::Tablet,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"manufacturer":"Apple","platform":"Tablet"}"#);
    }
}
