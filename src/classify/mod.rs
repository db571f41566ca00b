
use serde::{Deserialize, Serialize};

/// Largest payload still emitted as a quoted text literal
pub const DEFAULT_SIZE_THRESHOLD: usize = 65535;

/// How a resource's bytes are represented in the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Quoted string literals, one per source line
    Text,
    /// Numeric byte data, rendered by the configured binary strategy
    Binary,
}

/// Text/binary sniffing policy
///
/// A zero byte always forces the binary path. The optional size threshold
/// additionally sends anything longer than it to the binary path, since most
/// C toolchains cap string literal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    size_threshold: Option<usize>,
}

impl Classifier {
    /// NUL sniffing plus the default size threshold
    pub fn new() -> Self {
        Self {
            size_threshold: Some(DEFAULT_SIZE_THRESHOLD),
        }
    }

    /// NUL sniffing only, any length may go through the text path
    pub fn nul_only() -> Self {
        Self {
            size_threshold: None,
        }
    }

    /// Set (or clear) the size threshold
    pub fn size_threshold(mut self, threshold: Option<usize>) -> Self {
        self.size_threshold = threshold;
        self
    }

    pub fn threshold(&self) -> Option<usize> {
        self.size_threshold
    }

    pub fn classify(&self, bytes: &[u8]) -> Classification {
        let too_large = self
            .size_threshold
            .is_some_and(|threshold| bytes.len() > threshold);

        if too_large || bytes.contains(&0) {
            Classification::Binary
        } else {
            Classification::Text
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the default policy
pub fn classify(bytes: &[u8]) -> Classification {
    Classifier::new().classify(bytes)
}
