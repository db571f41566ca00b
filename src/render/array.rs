use super::RenderBinaryPayload;
use crate::layout::RecordLayout;

/// Bytes per row of an auxiliary array, for readability only
pub const ARRAY_ROW_WIDTH: usize = 8;

/// Emits `<byte_type> <symbol>[] = { 0x.., };` and references it by name
pub struct AuxiliaryArray {
    row_width: usize,
}

impl AuxiliaryArray {
    pub fn new(row_width: usize) -> Self {
        Self {
            row_width: row_width.max(1),
        }
    }
}

impl Default for AuxiliaryArray {
    fn default() -> Self {
        Self::new(ARRAY_ROW_WIDTH)
    }
}

impl RenderBinaryPayload for AuxiliaryArray {
    fn declaration(&self, symbol: &str, bytes: &[u8], layout: &RecordLayout) -> Vec<String> {
        let mut lines = Vec::with_capacity(bytes.len() / self.row_width + 3);
        lines.push(format!("{} {}[] = {{", layout.byte_type, symbol));

        for row in bytes.chunks(self.row_width) {
            let cells: Vec<String> = row.iter().map(|b| format!("0x{:02x},", b)).collect();
            lines.push(format!("{}{}", layout.indent(1), cells.join(" ")));
        }

        lines.push("};".to_string());
        lines.push(String::new());
        lines
    }

    fn payload(&self, symbol: &str, _bytes: &[u8], _layout: &RecordLayout) -> Vec<String> {
        vec![symbol.to_string()]
    }
}
