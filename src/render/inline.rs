use super::RenderBinaryPayload;
use crate::escape::escape_hex_literal;
use crate::layout::RecordLayout;

/// Bytes per `\xHH` literal line
pub const INLINE_ROW_WIDTH: usize = 16;

/// Emits the payload as `\xHH` string literals, no declaration needed
pub struct InlineLiteral {
    row_width: usize,
}

impl InlineLiteral {
    pub fn new(row_width: usize) -> Self {
        Self {
            row_width: row_width.max(1),
        }
    }
}

impl Default for InlineLiteral {
    fn default() -> Self {
        Self::new(INLINE_ROW_WIDTH)
    }
}

impl RenderBinaryPayload for InlineLiteral {
    fn declaration(&self, _symbol: &str, _bytes: &[u8], _layout: &RecordLayout) -> Vec<String> {
        Vec::new()
    }

    fn payload(&self, _symbol: &str, bytes: &[u8], _layout: &RecordLayout) -> Vec<String> {
        if bytes.is_empty() {
            return vec!["\"\"".to_string()];
        }
        bytes.chunks(self.row_width).map(escape_hex_literal).collect()
    }
}
