//! Platform detection from caller-supplied device patterns.
//!
//! Mobile patterns are always tried before tablet patterns, so a UA matching
//! both signatures is reported as `Mobile`. Anything that matches neither is
//! assumed to be a full desktop browser.

use regex::Regex;
use tracing::trace;

use crate::config::DevicePatterns;
use crate::error::{Error, Result};
use crate::types::Platform;

/// A named, compiled device pattern.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    name: String,
    regex: Regex,
}

impl PatternEntry {
    /// Device key the pattern was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source text of the pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Ordered list of device patterns. Entries are tried in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Compile `(name, pattern)` pairs in the order the iterator yields them.
    ///
    /// `category` is only used to label errors. Fails on the first pattern
    /// that does not compile.
    pub fn compile<I, K, V>(category: &'static str, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let entries = patterns
            .into_iter()
            .map(|(name, pattern)| {
                let name = name.into();
                match Regex::new(pattern.as_ref()) {
                    Ok(regex) => Ok(PatternEntry { name, regex }),
                    Err(source) => Err(Error::InvalidPattern {
                        category,
                        name,
                        source,
                    }),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// First entry found anywhere in `input`.
    pub fn find(&self, input: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.regex.is_match(input))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Device keys in match order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

/// A device pattern that decided a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceMatch<'a> {
    pub platform: Platform,
    /// Key of the pattern that matched (e.g. `"iphone"`).
    pub device: &'a str,
}

/// Classifier for Mobile / Tablet / Desktop.
#[derive(Debug, Clone)]
pub struct PlatformClassifier {
    mobile: PatternTable,
    tablet: PatternTable,
}

impl PlatformClassifier {
    /// Build a classifier from mobile and tablet `(name, pattern)` pairs.
    ///
    /// Iteration order of each argument is match order. Pass a `Vec` of pairs
    /// (or a `BTreeMap`) when precedence between patterns of the same category
    /// matters; a `HashMap` works but its order is unspecified.
    pub fn new<M, T, K, V>(mobile: M, tablet: T) -> Result<Self>
    where
        M: IntoIterator<Item = (K, V)>,
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mobile = PatternTable::compile("mobile", mobile)?;
        let tablet = PatternTable::compile("tablet", tablet)?;
        trace!(
            mobile = mobile.len(),
            tablet = tablet.len(),
            "compiled device patterns"
        );
        Ok(Self { mobile, tablet })
    }

    /// Build a classifier from loaded device patterns.
    pub fn from_patterns(patterns: &DevicePatterns) -> Result<Self> {
        Self::new(
            patterns.mobile.iter().map(|d| (d.name.as_str(), d.pattern.as_str())),
            patterns.tablet.iter().map(|d| (d.name.as_str(), d.pattern.as_str())),
        )
    }

    /// Build a classifier from the built-in device pattern set.
    pub fn with_default_devices() -> Result<Self> {
        Self::from_patterns(&DevicePatterns::builtin()?)
    }

    /// Classify the device platform of `ua`.
    pub fn classify(&self, ua: &str) -> Platform {
        match self.matched(ua) {
            Some(m) => m.platform,
            None => {
                trace!("no device pattern matched, using default platform");
                Platform::Desktop
            }
        }
    }

    /// The device pattern that decides the platform of `ua`, if any.
    ///
    /// `None` means the platform is the `Desktop` default.
    pub fn matched(&self, ua: &str) -> Option<DeviceMatch<'_>> {
        let (platform, entry) = if let Some(entry) = self.mobile.find(ua) {
            (Platform::Mobile, entry)
        } else {
            (Platform::Tablet, self.tablet.find(ua)?)
        };

        trace!(platform = %platform, device = entry.name(), "device pattern matched");
        Some(DeviceMatch {
            platform,
            device: entry.name(),
        })
    }

    pub fn mobile_patterns(&self) -> &PatternTable {
        &self.mobile
    }

    pub fn tablet_patterns(&self) -> &PatternTable {
        &self.tablet
    }
}
