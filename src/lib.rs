// Public API exports
pub mod classify;
pub mod config;
pub mod escape;
pub mod layout;
pub mod loader;
pub mod pack;
pub mod reader;
pub mod render;
pub mod source;

// Re-export main types for convenience
pub use classify::{Classification, Classifier, DEFAULT_SIZE_THRESHOLD, classify};
pub use config::{DuplicatePolicy, PackConfig};
pub use layout::RecordLayout;

pub use pack::{Document, PackError, Resource, ResourcePacker, pack};

pub use render::{AuxiliaryArray, BinaryStyle, InlineLiteral, RenderBinaryPayload};

pub use reader::{DecodeError, PackedEntry, ResourceTable, decode};

pub use loader::{Origin, RESOURCE_PATH_ENV, ResourceLoader, SearchPath};
