//! Best-effort "go to definition" for JavaScript and TypeScript sources
//!
//! Two textual heuristics, tried in order: an `import ... from '...'`
//! statement mentioning the token is followed to the imported file, otherwise
//! the first top-level declaration of the token in the current file is used.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::imports::resolve_import_path;

/// Where a definition was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// Open this file at its first line
    File(String),
    /// 1-based line in the current file
    Line(usize),
}

fn import_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?s)import.*?from\s*['"](.+?)['"]"#).expect("static regex"))
}

fn declaration_regex(token: &str) -> Option<Regex> {
    let pattern = format!(
        r"^(?:export\s+)?(?:async\s+)?(?:function|const|let|var|class|type|interface|enum)\s+{}\b",
        regex::escape(token)
    );
    Regex::new(&pattern).ok()
}

pub fn find_definition<S: AsRef<str>>(
    token: &str,
    content: &str,
    current_file: &str,
    all_paths: &[S],
) -> Option<Definition> {
    if token.is_empty() || all_paths.is_empty() {
        return None;
    }

    for caps in import_regex().captures_iter(content) {
        if !caps[0].contains(token) {
            continue;
        }
        if let Some(target) = resolve_import_path(&caps[1], current_file, all_paths) {
            debug!(token, target = %target, "definition found through import");
            return Some(Definition::File(target));
        }
    }

    let declaration = declaration_regex(token)?;
    content
        .split('\n')
        .position(|line| declaration.is_match(line))
        .map(|idx| Definition::Line(idx + 1))
}
