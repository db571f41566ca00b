use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::classify::{Classifier, DEFAULT_SIZE_THRESHOLD};
use crate::layout::RecordLayout;
use crate::render::BinaryStyle;

/// What to do when two inputs share a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail before emitting anything
    #[default]
    Reject,
    /// Emit every entry; lookups resolve to the first one
    Allow,
}

/// Everything a packer can be configured with
///
/// The default is the contract the command-line tool emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    pub layout: RecordLayout,
    pub binary_style: BinaryStyle,
    /// `None` classifies on zero bytes alone
    pub size_threshold: Option<usize>,
    pub duplicates: DuplicatePolicy,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            layout: RecordLayout::default(),
            binary_style: BinaryStyle::default(),
            size_threshold: Some(DEFAULT_SIZE_THRESHOLD),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl PackConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse pack config")
    }

    /// Load a JSON config file, e.g. from a build script
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read pack config: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new().size_threshold(self.size_threshold)
    }
}
