//! Candidate paths from a local checkout

use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::config::Config;

/// Upper bound on collected files
pub const MAX_FILES: usize = 10_000;

/// Collect files under `root` as sorted, `/` separated relative paths.
///
/// `.gitignore` rules apply, and any path component listed in
/// `config.ignore_patterns` prunes that entry and everything below it.
/// Entries that cannot be read, such as symlink loops, are logged and skipped.
pub fn collect_paths(root: &Path, config: &Config) -> Vec<String> {
    let ignored = config.ignore_patterns.clone();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .follow_links(true)
        .require_git(false)
        .filter_entry(move |entry| {
            let name = entry.file_name().to_string_lossy();
            !ignored.iter().any(|pattern| *pattern == name)
        })
        .build();

    let mut paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        paths.push(path);

        if paths.len() >= MAX_FILES {
            debug!("stopping walk of {} at {} files", root.display(), MAX_FILES);
            break;
        }
    }

    paths.sort();
    debug!("collected {} paths under {}", paths.len(), root.display());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_collects_relative_slash_paths() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "src/main.rs");
        touch(temp_dir.path(), "src/ui/list.rs");
        touch(temp_dir.path(), "README.md");

        let paths = collect_paths(temp_dir.path(), &Config::default());
        assert_eq!(paths, vec!["README.md", "src/main.rs", "src/ui/list.rs"]);
    }

    #[test]
    fn test_ignore_patterns_prune_directories() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "node_modules/pkg/index.js");
        touch(temp_dir.path(), "target/debug/app");
        touch(temp_dir.path(), "lib.rs");

        let paths = collect_paths(temp_dir.path(), &Config::default());
        assert_eq!(paths, vec!["lib.rs"]);
    }

    #[test]
    fn test_gitignore_is_honoured() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "keep.rs");
        touch(temp_dir.path(), "build/out.o");
        fs::write(temp_dir.path().join(".gitignore"), "build/\n").unwrap();

        let paths = collect_paths(temp_dir.path(), &Config::default());
        assert_eq!(paths, vec![".gitignore", "keep.rs"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_does_not_abort_walk() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "src/main.rs");
        touch(temp_dir.path(), "README.md");
        std::os::unix::fs::symlink(temp_dir.path(), temp_dir.path().join("src/loop")).unwrap();

        let paths = collect_paths(temp_dir.path(), &Config::default());
        assert!(paths.contains(&"src/main.rs".to_string()));
        assert!(paths.contains(&"README.md".to_string()));
        assert!(paths.iter().all(|p| !p.starts_with("src/loop/")));
    }
}
