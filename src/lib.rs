//! ua-classify - User-Agent manufacturer and platform classifier
//!
//! Two independent regex classifiers over a raw User-Agent string:
//!
//! - [`ManufacturerClassifier`]: vendor of the host OS (Apple, Google,
//!   Microsoft, Linux, Other) from a fixed built-in table.
//! - [`PlatformClassifier`]: Mobile, Tablet or Desktop from caller-supplied
//!   device patterns, compiled once at construction.
//!
//! Both are first-match-wins scans that fall back to a default label
//! (`Other`, `Desktop`); classification never fails.
//!
//! # Example
//!
//! ```
//! use ua_classify::{Classifier, Manufacturer, Platform, PlatformClassifier};
//!
//! let platform = PlatformClassifier::new(
//!     vec![("iphone", "iPhone")],
//!     vec![("ipad", "iPad")],
//! )
//! .unwrap();
//! let classifier = Classifier::new(platform);
//!
//! let result = classifier.classify("Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X)");
//! assert_eq!(result.manufacturer, Manufacturer::Apple);
//! assert_eq!(result.platform, Platform::Mobile);
//! ```

pub use error::{Error, Result};

// Device pattern configuration
pub mod config;

// Error type shared by construction paths
mod error;

// Vendor detection from a fixed table
pub mod manufacturer;

// Mobile / tablet / desktop detection
pub mod platform;

mod types;


pub use config::{DevicePattern, DevicePatterns};
pub use manufacturer::ManufacturerClassifier;
pub use platform::{DeviceMatch, PatternEntry, PatternTable, PlatformClassifier};
pub use types::{Classification, Manufacturer, Platform};

/// Runs both classifiers on the same string.
#[derive(Debug, Clone)]
pub struct Classifier {
    manufacturer: ManufacturerClassifier,
    platform: PlatformClassifier,
}

impl Classifier {
    /// Create a classifier using the given platform patterns.
    pub fn new(platform: PlatformClassifier) -> Self {
        Self {
            manufacturer: ManufacturerClassifier::new(),
            platform,
        }
    }

    /// Create a classifier with the built-in device pattern set.
    pub fn with_default_devices() -> Result<Self> {
        Ok(Self::new(PlatformClassifier::with_default_devices()?))
    }

    /// Classify manufacturer and platform of a User-Agent string.
    pub fn classify(&self, ua: &str) -> Classification {
        Classification {
            manufacturer: self.manufacturer.classify(ua),
            platform: self.platform.classify(ua),
        }
    }

    pub fn manufacturer(&self) -> &ManufacturerClassifier {
        &self.manufacturer
    }

    pub fn platform(&self) -> &PlatformClassifier {
        &self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classifier_builds() {
        let classifier = Classifier::with_default_devices().unwrap();
        assert!(!classifier.platform().mobile_patterns().is_empty());
        assert!(!classifier.platform().tablet_patterns().is_empty());
    }

    #[test]
    fn test_empty_string_gets_defaults() {
        let classifier = Classifier::with_default_devices().unwrap();
        assert_eq!(
            classifier.classify(""),
            Classification {
                manufacturer: Manufacturer::Other,
                platform: Platform::Desktop,
            }
        );
    }

    #[test]
    fn test_dimensions_are_independent() {
        // Platform patterns see nothing here, manufacturer still resolves.
        let empty: Vec<(&str, &str)> = vec![];
        let classifier = Classifier::new(PlatformClassifier::new(empty.clone(), empty).unwrap());
        let result = classifier.classify("Mozilla/5.0 (Linux; Android 13; Pixel 7) Mobile");
        assert_eq!(result.manufacturer, Manufacturer::Google);
        assert_eq!(result.platform, Platform::Desktop);
    }

    #[test]
    fn test_shared_across_threads() {
        let classifier = std::sync::Arc::new(Classifier::with_default_devices().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let classifier = classifier.clone();
                std::thread::spawn(move || {
                    classifier.classify("Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)")
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.manufacturer, Manufacturer::Apple);
            assert_eq!(result.platform, Platform::Tablet);
        }
    }
}
