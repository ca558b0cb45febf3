//! Resolving relative module imports to repository paths

/// Suffixes tried for an import that names a file
const FILE_SUFFIXES: [&str; 6] = ["", ".ts", ".tsx", ".js", ".jsx", ".json"];

/// Suffixes tried for an import that names a directory
const INDEX_SUFFIXES: [&str; 4] = ["/index.ts", "/index.tsx", "/index.js", "/index.jsx"];

/// Resolve a relative `import_path` seen in `current_file` to one of
/// `all_paths`. Bare module names (anything not starting with `.`) are not
/// resolved.
pub fn resolve_import_path<S: AsRef<str>>(
    import_path: &str,
    current_file: &str,
    all_paths: &[S],
) -> Option<String> {
    if !import_path.starts_with('.') {
        return None;
    }

    let directory = current_file.rsplit_once('/').map_or("", |(dir, _)| dir);
    let resolved = join_relative(directory, import_path);
    if resolved.is_empty() {
        return None;
    }

    FILE_SUFFIXES
        .iter()
        .chain(INDEX_SUFFIXES.iter())
        .map(|suffix| format!("{resolved}{suffix}"))
        .find(|candidate| all_paths.iter().any(|p| p.as_ref() == candidate.as_str()))
}

/// Apply `relative` to `base`, handling `.` and `..`. Climbing above the root
/// stays at the root.
fn join_relative(base: &str, relative: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    for part in relative.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}
