use serde::{Deserialize, Serialize};

/// The record layout contract shared with the consuming program
///
/// The generated document is only valid when compiled against a declaration
/// matching these names, e.g.
///
/// ```c
/// struct resource_pack {
///     const char *name;
///     const void *data;
///     unsigned int len;
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordLayout {
    /// First line of the document
    pub header_comment: String,
    /// Line pulling in the record type declaration
    pub include: String,
    /// Record type used for the table, e.g. `struct resource_pack`
    pub record_type: String,
    /// Symbol of the table itself
    pub table_symbol: String,
    pub name_field: String,
    pub len_field: String,
    pub data_field: String,
    /// Value of the name field in the guard entry
    pub guard_name: String,
    /// Element type of auxiliary byte arrays
    pub byte_type: String,
    /// Prefix of derived auxiliary array identifiers
    pub symbol_prefix: String,
    /// One level of indentation
    pub indent: String,
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self {
            header_comment: "/* AUTO GENERATED - DO NOT MODIFY BY HAND */".to_string(),
            include: "#include \"resource_internal.h\"".to_string(),
            record_type: "struct resource_pack".to_string(),
            table_symbol: "__resources".to_string(),
            name_field: "name".to_string(),
            len_field: "len".to_string(),
            data_field: "data".to_string(),
            guard_name: "(void*)0".to_string(),
            byte_type: "static const unsigned char".to_string(),
            symbol_prefix: "__resource_".to_string(),
            indent: "\t".to_string(),
        }
    }
}

impl RecordLayout {
    /// Indentation for the given nesting depth
    pub fn indent(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }

    /// Derive the auxiliary array identifier for a resource name
    ///
    /// Hex keeps the mapping injective and always yields a valid C identifier.
    pub fn symbol_for(&self, name: &str) -> String {
        format!("{}{}", self.symbol_prefix, hex::encode(name.as_bytes()))
    }

    /// `.field = value,` with the field names padded to line up
    pub fn field_line(&self, depth: usize, field: &str, value: &str) -> String {
        let width = self.field_width();
        format!(
            "{}.{:<width$} = {},",
            self.indent(depth),
            field,
            value,
            width = width
        )
    }

    /// `.field =` opening a multi-line value
    pub fn field_open(&self, depth: usize, field: &str) -> String {
        let width = self.field_width();
        format!("{}.{:<width$} =", self.indent(depth), field, width = width)
    }

    fn field_width(&self) -> usize {
        [&self.name_field, &self.len_field, &self.data_field]
            .iter()
            .map(|f| f.len())
            .max()
            .unwrap_or(0)
    }
}
