//! Code context sent along with an explanation request

use serde::{Deserialize, Serialize};

/// Lines kept above the selected line in a partial snippet
const LINES_BEFORE: usize = 3;

/// Lines kept below the selected line in a partial snippet
const LINES_AFTER: usize = 3;

const SNIPPET_MARKER: &str = "... (code snippet) ...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationContext {
    /// The whole file
    #[default]
    Full,
    /// A few lines around the selection
    Partial,
}

/// Build the code context for `selection` taken from `content`.
///
/// In partial mode the first line containing the selection is kept together
/// with its neighbours. If no single line contains it (for example a
/// multi-line selection) the whole file is used.
pub fn code_context(content: &str, selection: &str, mode: ExplanationContext) -> String {
    if mode == ExplanationContext::Full {
        return content.to_string();
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let Some(line_index) = lines.iter().position(|line| line.contains(selection)) else {
        return content.to_string();
    };

    let start = line_index.saturating_sub(LINES_BEFORE);
    let end = (line_index + LINES_AFTER + 1).min(lines.len());

    format!(
        "{SNIPPET_MARKER}\n{}\n{SNIPPET_MARKER}",
        lines[start..end].join("\n")
    )
}
