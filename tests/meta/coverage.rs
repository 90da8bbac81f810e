//! Keeps `tests/unit` in step with the module tree under `src`
//!
//! Every source module has a unit test file at the same relative path, every
//! unit test file still has a module to test, and no test file is empty.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    fn crate_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    // Crate roots and module declarations carry no logic of their own
    fn is_wiring_file(relative: &str) -> bool {
        let name = relative.rsplit('/').next().unwrap_or(relative);
        name == "lib.rs" || name == "main.rs" || name == "mod.rs"
    }

    /// Relative paths of every `.rs` file below `base`, with `/` separators
    fn rust_files(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(base)
                        .map_err(|_| io::Error::other("path escaped its base directory"))?;
                    let parts: Vec<String> = relative
                        .components()
                        .map(|part| part.as_os_str().to_string_lossy().into_owned())
                        .collect();
                    found.insert(parts.join("/"));
                }
            }
        }

        Ok(found)
    }

    fn modules_and_unit_tests() -> (BTreeSet<String>, BTreeSet<String>) {
        let root = crate_root();
        let modules = rust_files(&root.join("src"))
            .unwrap_or_else(|error| unreachable!("src should be readable: {error}"))
            .into_iter()
            .filter(|path| !is_wiring_file(path))
            .collect();
        let unit_tests = rust_files(&root.join("tests").join("unit"))
            .unwrap_or_else(|error| unreachable!("tests/unit should be readable: {error}"))
            .into_iter()
            .filter(|path| !is_wiring_file(path))
            .collect();
        (modules, unit_tests)
    }

    #[test]
    fn test_every_module_has_unit_tests() {
        let (modules, unit_tests) = modules_and_unit_tests();

        let untested: Vec<String> = modules
            .difference(&unit_tests)
            .map(|path| format!("  - src/{path} needs tests/unit/{path}"))
            .collect();

        assert!(
            untested.is_empty(),
            "modules without unit tests:\n{}",
            untested.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_module() {
        let (modules, unit_tests) = modules_and_unit_tests();

        let stale: Vec<String> = unit_tests
            .difference(&modules)
            .map(|path| format!("  - tests/unit/{path} has no src/{path}"))
            .collect();

        assert!(
            stale.is_empty(),
            "unit tests for modules that no longer exist:\n{}",
            stale.join("\n")
        );
    }

    #[test]
    fn test_test_files_declare_tests() {
        let tests_dir = crate_root().join("tests");
        let files = rust_files(&tests_dir)
            .unwrap_or_else(|error| unreachable!("tests should be readable: {error}"));

        let mut empty = Vec::new();
        for relative in files.iter().filter(|path| !is_wiring_file(path)) {
            let content = fs::read_to_string(tests_dir.join(relative))
                .unwrap_or_else(|error| unreachable!("{relative} should be readable: {error}"));
            if !content.contains("#[test]") {
                empty.push(format!("  - tests/{relative}"));
            }
        }

        assert!(
            empty.is_empty(),
            "test files without a single #[test]:\n{}",
            empty.join("\n")
        );
    }
}
