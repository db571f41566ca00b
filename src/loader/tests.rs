#[cfg(test)]
mod tests {
    use crate::loader::{Origin, ResourceLoader, SearchPath};
    use crate::reader::{PackedEntry, ResourceTable};
    use std::fs;

    fn table() -> ResourceTable {
        ResourceTable::new(vec![
            PackedEntry {
                name: "respack-test/shader.glsl".to_string(),
                data: b"void main() {}\n".to_vec(),
            },
            PackedEntry {
                name: "respack-test/dup".to_string(),
                data: b"first".to_vec(),
            },
            PackedEntry {
                name: "respack-test/dup".to_string(),
                data: b"second".to_vec(),
            },
        ])
    }

    #[test]
    fn test_get_from_packed_table() {
        let table = table();
        let mut loader = ResourceLoader::with_search_path(&table, None);

        let data = loader.get("respack-test/shader.glsl").unwrap();
        assert_eq!(&*data, b"void main() {}\n");
        assert_eq!(loader.origin("respack-test/shader.glsl"), Some(Origin::Packed));
    }

    #[test]
    fn test_missing_everywhere() {
        let table = table();
        let mut loader = ResourceLoader::with_search_path(&table, None);
        assert!(loader.get("respack-test/absent").is_none());
        assert_eq!(loader.cached(), 0);
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        let table = table();
        let mut loader = ResourceLoader::with_search_path(&table, None).packed_only();
        assert_eq!(&*loader.get("respack-test/dup").unwrap(), b"first");
    }

    #[test]
    fn test_refcount_evicts_on_last_put() {
        let table = table();
        let mut loader = ResourceLoader::with_search_path(&table, None);

        let a = loader.get("respack-test/shader.glsl").unwrap();
        let b = loader.get("respack-test/shader.glsl").unwrap();
        assert_eq!(a, b);
        assert_eq!(loader.cached(), 1);

        assert!(!loader.put("respack-test/shader.glsl"));
        assert_eq!(loader.cached(), 1);
        assert!(loader.put("respack-test/shader.glsl"));
        assert_eq!(loader.cached(), 0);

        // Unknown names are a no-op
        assert!(!loader.put("respack-test/shader.glsl"));
    }

    #[test]
    fn test_search_path_overrides_packed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("respack-test")).unwrap();
        fs::write(dir.path().join("respack-test/shader.glsl"), b"edited").unwrap();

        let table = table();
        let mut loader =
            ResourceLoader::with_search_path(&table, Some(SearchPath::new(dir.path())));

        assert_eq!(&*loader.get("respack-test/shader.glsl").unwrap(), b"edited");
        assert_eq!(loader.origin("respack-test/shader.glsl"), Some(Origin::SearchPath));
    }

    #[test]
    fn test_packed_only_ignores_search_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("respack-test")).unwrap();
        fs::write(dir.path().join("respack-test/shader.glsl"), b"edited").unwrap();

        let table = table();
        let mut loader =
            ResourceLoader::with_search_path(&table, Some(SearchPath::new(dir.path())))
                .packed_only();

        assert_eq!(&*loader.get("respack-test/shader.glsl").unwrap(), b"void main() {}\n");
    }

    #[test]
    fn test_working_dir_name_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.txt");
        fs::write(&path, b"local copy").unwrap();
        let name = path.to_str().unwrap().to_string();

        let table = ResourceTable::new(vec![PackedEntry {
            name: name.clone(),
            data: b"packed copy".to_vec(),
        }]);
        let mut loader = ResourceLoader::with_search_path(&table, None);

        assert_eq!(&*loader.get(&name).unwrap(), b"local copy");
        assert_eq!(loader.origin(&name), Some(Origin::WorkingDir));
    }

    #[test]
    fn test_traversal_name_skips_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let table = ResourceTable::new(vec![PackedEntry {
            name: "../respack-test-escape".to_string(),
            data: b"packed".to_vec(),
        }]);
        let mut loader =
            ResourceLoader::with_search_path(&table, Some(SearchPath::new(dir.path())));

        assert_eq!(&*loader.get("../respack-test-escape").unwrap(), b"packed");
        assert_eq!(loader.origin("../respack-test-escape"), Some(Origin::Packed));
    }
}
