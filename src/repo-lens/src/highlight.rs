//! Splitting a matched path into highlighted directory and file-name segments

use std::collections::HashSet;

/// A run of characters that is either entirely matched or entirely unmatched
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub matched: bool,
}

/// One side of a split path
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Char offset of this segment within the full path
    pub start: usize,
    /// One flag per char of `text`
    pub marks: Vec<bool>,
}

impl Segment {
    fn new(chars: &[char], start: usize, matched: &HashSet<usize>) -> Self {
        Self {
            text: chars.iter().collect(),
            start,
            marks: (0..chars.len()).map(|i| matched.contains(&(start + i))).collect(),
        }
    }

    /// Offsets relative to the segment start that were matched
    pub fn matched_offsets(&self) -> Vec<usize> {
        self.marks
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
            .collect()
    }

    /// Collapse consecutive chars with the same mark into runs
    pub fn runs(&self) -> Vec<Run> {
        let mut runs: Vec<Run> = Vec::new();
        for (c, &matched) in self.text.chars().zip(&self.marks) {
            match runs.last_mut() {
                Some(run) if run.matched == matched => run.text.push(c),
                _ => runs.push(Run {
                    text: c.to_string(),
                    matched,
                }),
            }
        }
        runs
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A path split at its last `/`, with matched chars marked on each side
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightedPath {
    /// Everything up to and including the last `/`; empty for top-level files
    pub directory: Segment,
    pub file_name: Segment,
}

/// Project matched positions onto the directory and file-name parts of `path`
pub fn highlight(path: &str, positions: &[usize]) -> HighlightedPath {
    let chars: Vec<char> = path.chars().collect();
    let matched: HashSet<usize> = positions.iter().copied().collect();
    let split = chars.iter().rposition(|&c| c == '/').map_or(0, |i| i + 1);

    HighlightedPath {
        directory: Segment::new(&chars[..split], 0, &matched),
        file_name: Segment::new(&chars[split..], split, &matched),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::fuzzy_match;

    #[test]
    fn test_split_at_last_slash() {
        let h = highlight("src/components/Button.tsx", &[]);
        assert_eq!(h.directory.text, "src/components/");
        assert_eq!(h.file_name.text, "Button.tsx");
        assert_eq!(h.file_name.start, 15);
    }

    #[test]
    fn test_top_level_file_has_empty_directory() {
        let h = highlight("README.md", &[0]);
        assert!(h.directory.is_empty());
        assert_eq!(h.file_name.matched_offsets(), vec![0]);
    }

    #[test]
    fn test_marks_follow_positions_on_both_sides() {
        let m = fuzzy_match("scbt", "src/components/Button.tsx").unwrap();
        let h = highlight("src/components/Button.tsx", &m.positions);
        assert_eq!(h.directory.matched_offsets(), vec![0, 2]);
        assert_eq!(h.file_name.matched_offsets(), vec![0, 2]);
    }

    #[test]
    fn test_runs_group_matched_chars() {
        let h = highlight("lib/main.rs", &[4, 5, 9]);
        let runs = h.file_name.runs();
        let expected = vec![
            Run { text: "ma".into(), matched: true },
            Run { text: "in.".into(), matched: false },
            Run { text: "r".into(), matched: true },
            Run { text: "s".into(), matched: false },
        ];
        assert_eq!(runs, expected);
        assert_eq!(h.directory.runs(), vec![Run { text: "lib/".into(), matched: false }]);
    }

    #[test]
    fn test_non_ascii_offsets_are_chars() {
        let h = highlight("dóc/ñame.rs", &[1, 4]);
        assert_eq!(h.directory.matched_offsets(), vec![1]);
        assert_eq!(h.file_name.matched_offsets(), vec![0]);
        assert_eq!(h.file_name.runs()[0].text, "ñ");
    }
}
