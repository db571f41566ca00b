mod document;
mod entry;
mod error;


pub use document::Document;
pub use entry::Resource;
pub use error::PackError;

use crate::classify::{Classification, Classifier};
use crate::config::{DuplicatePolicy, PackConfig};
use crate::escape::escape_literal;
use crate::layout::RecordLayout;
use crate::render::{BinaryStyle, RenderBinaryPayload, render_text};
use crate::source;
use std::collections::HashSet;
use tracing::{debug, info};

/// Turns named byte buffers into a generated resource table
pub struct ResourcePacker {
    layout: RecordLayout,
    classifier: Classifier,
    binary: Box<dyn RenderBinaryPayload>,
    duplicates: DuplicatePolicy,
}

/// A resource after classification, ready for emission
struct Prepared<'a> {
    resource: &'a Resource,
    class: Classification,
    symbol: String,
}

impl ResourcePacker {
    /// Create a packer with the default contract
    pub fn new() -> Self {
        Self::from_config(&PackConfig::default())
    }

    pub fn from_config(config: &PackConfig) -> Self {
        Self {
            layout: config.layout.clone(),
            classifier: config.classifier(),
            binary: config.binary_style.strategy(),
            duplicates: config.duplicates,
        }
    }

    pub fn layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn binary_style(mut self, style: BinaryStyle) -> Self {
        self.binary = style.strategy();
        self
    }

    /// Use a custom binary strategy
    pub fn binary_strategy(mut self, strategy: impl RenderBinaryPayload + 'static) -> Self {
        self.binary = Box::new(strategy);
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Read every path, then pack
    ///
    /// All files are read before anything is emitted, so any failure leaves
    /// no partial document behind.
    pub fn pack_files<P: AsRef<str>>(&self, paths: &[P]) -> Result<Document, PackError> {
        let resources = paths
            .iter()
            .map(|p| source::read_resource(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        self.pack_resources(&resources)
    }

    /// Pack in-memory resources, in order
    pub fn pack_resources(&self, resources: &[Resource]) -> Result<Document, PackError> {
        self.check_duplicates(resources)?;

        let mut symbols = HashSet::with_capacity(resources.len());
        let prepared: Vec<Prepared<'_>> = resources
            .iter()
            .enumerate()
            .map(|(index, resource)| {
                let class = resource.classify(&self.classifier);
                debug!(
                    resource = %resource.name,
                    len = resource.len(),
                    ?class,
                    "classified resource"
                );
                Prepared {
                    resource,
                    class,
                    symbol: self.unique_symbol(&resource.name, index, &mut symbols),
                }
            })
            .collect();

        let mut lines = vec![
            self.layout.header_comment.clone(),
            self.layout.include.clone(),
            String::new(),
        ];

        // Auxiliary data must be declared before the table references it
        for item in prepared.iter().filter(|p| p.class == Classification::Binary) {
            lines.extend(
                self.binary
                    .declaration(&item.symbol, &item.resource.bytes, &self.layout),
            );
        }

        lines.push(format!(
            "{} {}[] = {{",
            self.layout.record_type, self.layout.table_symbol
        ));
        for item in &prepared {
            lines.extend(self.entry_lines(item));
        }
        lines.extend(self.guard_lines());
        lines.push("};".to_string());

        info!(
            resources = resources.len(),
            binary = prepared
                .iter()
                .filter(|p| p.class == Classification::Binary)
                .count(),
            "packed resource table"
        );

        Ok(Document::new(lines))
    }

    /// Auxiliary symbol for entry `index`, suffixed when its name repeats
    fn unique_symbol(&self, name: &str, index: usize, used: &mut HashSet<String>) -> String {
        let base = self.layout.symbol_for(name);
        let mut symbol = base.clone();
        let mut suffix = index;
        while !used.insert(symbol.clone()) {
            symbol = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        symbol
    }

    fn check_duplicates(&self, resources: &[Resource]) -> Result<(), PackError> {
        if self.duplicates == DuplicatePolicy::Allow {
            return Ok(());
        }

        let mut seen = HashSet::with_capacity(resources.len());
        for resource in resources {
            if !seen.insert(resource.name.as_str()) {
                return Err(PackError::DuplicateName(resource.name.clone()));
            }
        }
        Ok(())
    }

    fn entry_lines(&self, item: &Prepared<'_>) -> Vec<String> {
        let layout = &self.layout;
        let data = match item.class {
            Classification::Text => render_text(&item.resource.bytes),
            Classification::Binary => {
                self.binary
                    .payload(&item.symbol, &item.resource.bytes, layout)
            }
        };

        let mut lines = vec![
            format!("{}{{", layout.indent(1)),
            layout.field_line(
                2,
                &layout.name_field,
                &escape_literal(item.resource.name.as_bytes()),
            ),
            layout.field_line(2, &layout.len_field, &item.resource.len().to_string()),
        ];

        match data.as_slice() {
            [single] => lines.push(layout.field_line(2, &layout.data_field, single)),
            fragments => {
                lines.push(layout.field_open(2, &layout.data_field));
                let pad = layout.indent(3);
                lines.extend(fragments.iter().map(|f| format!("{}{}", pad, f)));
                if let Some(last) = lines.last_mut() {
                    last.push(',');
                }
            }
        }

        lines.push(format!("{}}},", layout.indent(1)));
        lines
    }

    fn guard_lines(&self) -> Vec<String> {
        let layout = &self.layout;
        vec![
            format!("{}/* Guard */", layout.indent(1)),
            format!(
                "{}{{ .{} = {} }}",
                layout.indent(1),
                layout.name_field,
                layout.guard_name
            ),
        ]
    }
}

impl Default for ResourcePacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Pack files with the default contract
pub fn pack<P: AsRef<str>>(paths: &[P]) -> Result<Document, PackError> {
    ResourcePacker::new().pack_files(paths)
}
