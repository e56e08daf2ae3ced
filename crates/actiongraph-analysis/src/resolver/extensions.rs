//! Extension probing for module files.

use crate::store::SourceStore;

/// Extensions tried, in order, for a specifier without one.
pub const EXTENSIONS: &[&str] = &["ts", "tsx", "d.ts", "js", "jsx", "mjs", "json"];

/// Find the stored file a candidate path refers to.
///
/// Tries the path as-is, then with each extension appended, then as a
/// directory containing an `index` file.
pub fn resolve_with_extensions<'s>(store: &'s SourceStore, candidate: &str) -> Option<&'s str> {
    if let Some((path, _)) = store.get_entry(candidate) {
        return Some(path);
    }

    for ext in EXTENSIONS {
        if let Some((path, _)) = store.get_entry(&format!("{candidate}.{ext}")) {
            return Some(path);
        }
    }

    let dir = candidate.trim_end_matches('/');
    for ext in EXTENSIONS {
        let index = if dir.is_empty() {
            format!("index.{ext}")
        } else {
            format!("{dir}/index.{ext}")
        };
        if let Some((path, _)) = store.get_entry(&index) {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_exact_then_extension_then_index() {
        let mut store = SourceStore::new();
        store.create_source_file("p/src/a", "");
        store.create_source_file("p/src/a.ts", "");
        store.create_source_file("p/src/b.d.ts", "");
        store.create_source_file("p/src/c/index.tsx", "");

        assert_eq!(resolve_with_extensions(&store, "src/a"), Some("src/a"));
        assert_eq!(resolve_with_extensions(&store, "src/b"), Some("src/b.d.ts"));
        assert_eq!(resolve_with_extensions(&store, "src/c"), Some("src/c/index.tsx"));
        assert_eq!(resolve_with_extensions(&store, "src/d"), None);
    }
}
