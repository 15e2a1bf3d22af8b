//! Device pattern configuration.
//!
//! Patterns are stored as JSON. Each category is either a list of
//! `{"name", "pattern"}` objects, which keeps its order, or an object mapping
//! name to pattern, which is read in key order:
//!
//! ```json
//! {
//!   "mobile": [ { "name": "iphone", "pattern": "iPhone" } ],
//!   "tablet": { "ipad": "iPad" }
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

// Default device set shipped with the crate
const BUILTIN_DEVICES_JSON: &str = include_str!("../data/devices.json");

/// A single named device pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevicePattern {
    pub name: String,
    pub pattern: String,
}

impl DevicePattern {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Mobile and tablet patterns, in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevicePatterns {
    #[serde(default, deserialize_with = "ordered_patterns")]
    pub mobile: Vec<DevicePattern>,
    #[serde(default, deserialize_with = "ordered_patterns")]
    pub tablet: Vec<DevicePattern>,
}

impl DevicePatterns {
    /// Parse patterns from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON pattern file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading device patterns");
        Self::from_json(&json)
    }

    /// The device set embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DEVICES_JSON)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PatternList {
    Ordered(Vec<DevicePattern>),
    Keyed(BTreeMap<String, String>),
}

fn ordered_patterns<'de, D>(deserializer: D) -> std::result::Result<Vec<DevicePattern>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PatternList::deserialize(deserializer)? {
        PatternList::Ordered(list) => list,
        PatternList::Keyed(map) => map
            .into_iter()
            .map(|(name, pattern)| DevicePattern { name, pattern })
            .collect(),
    })
}
