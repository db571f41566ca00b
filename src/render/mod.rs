mod array;
mod inline;


pub use array::AuxiliaryArray;
pub use inline::InlineLiteral;

use crate::escape::{escape_literal, split_lines};
use crate::layout::RecordLayout;
use serde::{Deserialize, Serialize};

/// Strategy for emitting a binary-classified payload
pub trait RenderBinaryPayload: Send + Sync {
    /// File-scoped lines that must precede the table (may be empty)
    ///
    /// # Arguments
    /// * `symbol` - Identifier derived from the resource name
    /// * `bytes` - Raw payload
    fn declaration(&self, symbol: &str, bytes: &[u8], layout: &RecordLayout) -> Vec<String>;

    /// Value of the entry's data field, one element per output line
    fn payload(&self, symbol: &str, bytes: &[u8], layout: &RecordLayout) -> Vec<String>;
}

/// Which binary strategy a packer uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryStyle {
    /// Named byte array declared ahead of the table
    #[default]
    AuxiliaryArray,
    /// `\xHH` string literals directly in the entry
    InlineLiteral,
}

impl BinaryStyle {
    pub fn strategy(self) -> Box<dyn RenderBinaryPayload> {
        match self {
            BinaryStyle::AuxiliaryArray => Box::new(AuxiliaryArray::default()),
            BinaryStyle::InlineLiteral => Box::new(InlineLiteral::default()),
        }
    }
}

/// Text path: one escaped literal per source line
pub fn render_text(bytes: &[u8]) -> Vec<String> {
    let lines = split_lines(bytes);
    if lines.is_empty() {
        return vec!["\"\"".to_string()];
    }
    lines.into_iter().map(escape_literal).collect()
}
