//! Keeps the tests/unit tree mirroring the src tree one-to-one

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files need no mirror
    fn is_structural(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    fn collect_rust_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();

        if dir.is_dir() {
            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_| io::Error::other("failed to strip prefix"))?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative);
                    paths.extend(collect_rust_paths(&path, base)?);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative);
                }
            }
        }

        Ok(paths)
    }

    #[test]
    fn test_src_and_unit_trees_mirror_each_other() {
        let src_paths = collect_rust_paths(Path::new("src"), Path::new("src"))
            .unwrap_or_else(|error| panic!("failed to read src directory: {error}"));
        let test_paths = collect_rust_paths(Path::new("tests/unit"), Path::new("tests/unit"))
            .unwrap_or_else(|error| panic!("failed to read tests/unit directory: {error}"));

        let missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_structural(path) && !test_paths.contains(*path))
            .collect();
        assert!(
            missing.is_empty(),
            "src files without a tests/unit counterpart: {missing:?}"
        );

        let orphaned: Vec<&String> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .collect();
        assert!(
            orphaned.is_empty(),
            "tests/unit files without a src counterpart: {orphaned:?}"
        );
    }

    #[test]
    fn test_every_unit_file_contains_tests() {
        fn check(dir: &Path, untested: &mut Vec<String>) -> Result<(), io::Error> {
            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    check(&path, untested)?;
                    continue;
                }

                let name = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or_default();
                if path.extension().and_then(|ext| ext.to_str()) != Some("rs")
                    || name == "mod.rs"
                {
                    continue;
                }

                if !fs::read_to_string(&path)?.contains("#[test]") {
                    untested.push(path.display().to_string());
                }
            }
            Ok(())
        }

        let mut untested = Vec::new();
        check(Path::new("tests/unit"), &mut untested)
            .unwrap_or_else(|error| panic!("failed to scan tests/unit: {error}"));

        assert!(
            untested.is_empty(),
            "unit test files without any #[test] functions: {untested:?}"
        );
    }
}
