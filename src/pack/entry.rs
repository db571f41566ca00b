use crate::classify::{Classification, Classifier};

/// A named byte buffer waiting to be packed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Lookup key, exactly as supplied by the caller
    pub name: String,
    /// Payload, never transformed
    pub bytes: Vec<u8>,
}

impl Resource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Value of the emitted `len` field
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn classify(&self, classifier: &Classifier) -> Classification {
        classifier.classify(&self.bytes)
    }
}
