//! `compilerOptions.paths` alias matching.

use crate::tsconfig::PathMapping;

/// Expand `specifier` through the first matching alias.
///
/// Patterns hold at most one `*`; the text it matched replaces the `*` in
/// each target. Exact patterns win over wildcard ones, and among wildcard
/// patterns the longest prefix wins.
pub fn match_path_alias(specifier: &str, paths: &[PathMapping]) -> Option<Vec<String>> {
    if let Some(exact) = paths.iter().find(|m| m.pattern == specifier) {
        return Some(exact.targets.clone());
    }

    paths
        .iter()
        .filter_map(|mapping| {
            let (prefix, suffix) = mapping.pattern.split_once('*')?;
            let captured = specifier.strip_prefix(prefix)?.strip_suffix(suffix)?;
            Some((prefix.len(), mapping, captured))
        })
        .max_by_key(|(prefix_len, _, _)| *prefix_len)
        .map(|(_, mapping, captured)| {
            mapping
                .targets
                .iter()
                .map(|target| target.replacen('*', captured, 1))
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pattern: &str, target: &str) -> PathMapping {
        PathMapping {
            pattern: pattern.to_string(),
            targets: vec![target.to_string()],
        }
    }

    #[test]
    fn substitutes_wildcard() {
        let paths = vec![mapping("@app/*", "src/app/*")];
        assert_eq!(
            match_path_alias("@app/store/actions", &paths),
            Some(vec!["src/app/store/actions".to_string()])
        );
        assert_eq!(match_path_alias("@ngrx/store", &paths), None);
    }

    #[test]
    fn exact_and_longest_prefix_win() {
        let paths = vec![
            mapping("@app/*", "src/app/*"),
            mapping("@app/store/*", "libs/store/*"),
            mapping("@env", "src/environments/environment"),
        ];
        assert_eq!(
            match_path_alias("@app/store/x", &paths),
            Some(vec!["libs/store/x".to_string()])
        );
        assert_eq!(
            match_path_alias("@env", &paths),
            Some(vec!["src/environments/environment".to_string()])
        );
    }
}
