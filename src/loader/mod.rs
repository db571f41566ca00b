mod path;

#[cfg(test)]
mod tests;

pub use path::{InvalidPath, SearchPath};

use crate::reader::ResourceTable;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Environment variable naming the override directory
pub const RESOURCE_PATH_ENV: &str = "RESOURCE_PATH";

/// Where a loaded resource came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The name itself, relative to the working directory
    WorkingDir,
    /// The name joined under the search path
    SearchPath,
    /// The packed table
    Packed,
}

struct Cached {
    data: Arc<[u8]>,
    origin: Origin,
    refcnt: usize,
}

/// Reference-counted resource lookup over a packed table
///
/// A file on disk with the resource's name wins over the packed copy, so
/// resources can be edited without a rebuild. Lookup order: working
/// directory, search path, packed table (first match).
pub struct ResourceLoader<'t> {
    table: &'t ResourceTable,
    search_path: Option<SearchPath>,
    filesystem: bool,
    cache: HashMap<String, Cached>,
}

impl<'t> ResourceLoader<'t> {
    /// Loader with the search path taken from `RESOURCE_PATH`
    pub fn new(table: &'t ResourceTable) -> Self {
        let search_path = std::env::var_os(RESOURCE_PATH_ENV).map(SearchPath::new);
        Self::with_search_path(table, search_path)
    }

    pub fn with_search_path(table: &'t ResourceTable, search_path: Option<SearchPath>) -> Self {
        Self {
            table,
            search_path,
            filesystem: true,
            cache: HashMap::new(),
        }
    }

    /// Only ever serve the packed table
    pub fn packed_only(mut self) -> Self {
        self.filesystem = false;
        self
    }

    /// Borrow a resource, loading it on first use
    ///
    /// Every successful call must be balanced by a [`put`](Self::put).
    pub fn get(&mut self, name: &str) -> Option<Arc<[u8]>> {
        if let Some(cached) = self.cache.get_mut(name) {
            cached.refcnt += 1;
            return Some(Arc::clone(&cached.data));
        }

        let (data, origin) = self.load(name)?;
        debug!(resource = name, ?origin, len = data.len(), "loaded resource");

        let data: Arc<[u8]> = data.into();
        self.cache.insert(
            name.to_string(),
            Cached {
                data: Arc::clone(&data),
                origin,
                refcnt: 1,
            },
        );
        Some(data)
    }

    /// Release one reference; returns true once the entry is evicted
    pub fn put(&mut self, name: &str) -> bool {
        let Some(cached) = self.cache.get_mut(name) else {
            return false;
        };

        cached.refcnt -= 1;
        if cached.refcnt == 0 {
            self.cache.remove(name);
            true
        } else {
            false
        }
    }

    pub fn origin(&self, name: &str) -> Option<Origin> {
        self.cache.get(name).map(|c| c.origin)
    }

    /// Number of resources currently held
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn load(&self, name: &str) -> Option<(Vec<u8>, Origin)> {
        if self.filesystem {
            if let Some(data) = read_file(Path::new(name)) {
                return Some((data, Origin::WorkingDir));
            }

            if let Some(search_path) = &self.search_path {
                match search_path.resolve(name) {
                    Ok(path) => {
                        if let Some(data) = read_file(&path) {
                            return Some((data, Origin::SearchPath));
                        }
                    }
                    Err(e) => warn!("{}", e),
                }
            }
        }

        self.table
            .get(name)
            .map(|entry| (entry.data.clone(), Origin::Packed))
    }
}

/// Regular files only; anything unreadable falls through to the next source
fn read_file(path: &Path) -> Option<Vec<u8>> {
    if !path.is_file() {
        return None;
    }
    match fs::read(path) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!(path = %path.display(), "failed to read resource override: {}", e);
            None
        }
    }
}
