//! Manufacturer detection.
//!
//! Matches a fixed list of vendor tokens against the User-Agent. The list is
//! ordered and the first hit wins, so a string carrying several tokens is
//! resolved by position in the table rather than by specificity.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::types::Manufacturer;

const MANUFACTURER_PATTERNS: [(Manufacturer, &str); 6] = [
    (Manufacturer::Apple, "iOS"),
    (Manufacturer::Apple, "OS X"),
    (Manufacturer::Apple, "Macintosh"),
    (Manufacturer::Google, "Android"),
    (Manufacturer::Microsoft, "Windows"),
    (Manufacturer::Linux, "Linux"),
];

static MANUFACTURER_TABLE: Lazy<Vec<(Manufacturer, &'static str, Regex)>> = Lazy::new(|| {
    MANUFACTURER_PATTERNS
        .iter()
        .map(|&(label, pattern)| (label, pattern, Regex::new(pattern).unwrap()))
        .collect()
});

/// Classifier for the vendor of the host OS.
///
/// Holds no state of its own; every instance shares the same compiled table.
#[derive(Debug, Clone, Copy)]
pub struct ManufacturerClassifier {
    _private: (),
}

impl ManufacturerClassifier {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Classify the manufacturer of the OS that sent `ua`.
    ///
    /// Returns [`Manufacturer::Other`] when no vendor token is present.
    pub fn classify(&self, ua: &str) -> Manufacturer {
        match self.matched_pattern(ua) {
            Some((label, _)) => label,
            None => {
                trace!("no manufacturer pattern matched, using default");
                Manufacturer::Other
            }
        }
    }

    /// The first table entry found in `ua`, as `(label, pattern text)`.
    pub fn matched_pattern(&self, ua: &str) -> Option<(Manufacturer, &'static str)> {
        MANUFACTURER_TABLE
            .iter()
            .find(|(_, _, regex)| regex.is_match(ua))
            .map(|&(label, pattern, _)| {
                trace!(manufacturer = %label, pattern, "manufacturer pattern matched");
                (label, pattern)
            })
    }
}

impl Default for ManufacturerClassifier {
    fn default() -> Self {
        Self::new()
    }
}
