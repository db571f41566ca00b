use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid resource name for search path: {0}")]
pub struct InvalidPath(pub String);

/// Directory searched for resource overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    root: PathBuf,
}

impl SearchPath {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a resource name under the root
    ///
    /// Absolute names and `..` components are refused so a lookup can never
    /// leave the search directory. `.` components are dropped.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, InvalidPath> {
        if name.is_empty() {
            return Err(InvalidPath("Empty name".to_string()));
        }

        let mut resolved = self.root.clone();
        let mut pushed = false;

        for component in Path::new(name).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(InvalidPath(format!("Absolute name: {}", name)));
                }
                Component::ParentDir => {
                    return Err(InvalidPath(format!("Parent directory traversal: {}", name)));
                }
                Component::CurDir => continue,
                Component::Normal(part) => {
                    resolved.push(part);
                    pushed = true;
                }
            }
        }

        if !pushed {
            return Err(InvalidPath(format!("No valid components: {}", name)));
        }

        Ok(resolved)
    }
}
