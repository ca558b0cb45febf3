//! Quick-open picker state
//!
//! Terminal independent: key events go in, the ranked list and the eventual
//! choice come out. Rendering lives in the binary.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::search::{search, PathMatch};

/// Message shown when a non-empty query matches nothing
pub const NO_MATCHES_MESSAGE: &str = "No files found";

/// Message shown before anything is typed
pub const EMPTY_QUERY_MESSAGE: &str = "Start typing to search";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(String),
    Cancelled,
}

pub struct Picker {
    /// Current query string
    query: String,
    /// All candidate paths
    candidates: Vec<String>,
    /// Ranked matches for the current query
    results: Vec<PathMatch>,
    /// Currently selected index in results
    selected: usize,
    max_results: usize,
    outcome: Option<Outcome>,
}

impl Picker {
    pub fn new(candidates: Vec<String>, max_results: usize) -> Self {
        Self {
            query: String::new(),
            candidates,
            results: Vec::new(),
            selected: 0,
            max_results,
            outcome: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.update_results();
    }

    pub fn results(&self) -> &[PathMatch] {
        &self.results
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    /// Placeholder text for an empty result list
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.results.is_empty() {
            None
        } else if self.query.is_empty() {
            Some(EMPTY_QUERY_MESSAGE)
        } else {
            Some(NO_MATCHES_MESSAGE)
        }
    }

    fn update_results(&mut self) {
        if self.query.is_empty() {
            self.results.clear();
        } else {
            self.results = search(&self.query, &self.candidates, self.max_results);
        }
        self.selected = 0;
    }

    fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1) % self.results.len();
        }
    }

    fn select_prev(&mut self) {
        if !self.results.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.results.len() - 1);
        }
    }

    fn confirm_selection(&mut self) {
        if let Some(result) = self.results.get(self.selected) {
            self.outcome = Some(Outcome::Selected(result.path.clone()));
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match (key, modifiers) {
            // Quit without selection
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.outcome = Some(Outcome::Cancelled);
            }
            // Navigation
            (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
                self.select_next();
            }
            (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
                self.select_prev();
            }
            (KeyCode::Enter, _) => {
                self.confirm_selection();
            }
            (KeyCode::Backspace, _) => {
                self.query.pop();
                self.update_results();
            }
            // Clear query
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.query.clear();
                self.update_results();
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.query.push(c);
                self.update_results();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> Picker {
        let candidates = ["src/main.rs", "src/matcher.rs", "README.md", "docs/manual.md"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Picker::new(candidates, 20)
    }

    fn type_str(picker: &mut Picker, text: &str) {
        for c in text.chars() {
            picker.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_empty_query_shows_hint() {
        let picker = picker();
        assert!(picker.results().is_empty());
        assert_eq!(picker.empty_message(), Some(EMPTY_QUERY_MESSAGE));
    }

    #[test]
    fn test_typing_filters() {
        let mut picker = picker();
        type_str(&mut picker, "ma");
        assert_eq!(picker.results().len(), 3);
        assert_eq!(picker.empty_message(), None);

        type_str(&mut picker, "zz");
        assert!(picker.results().is_empty());
        assert_eq!(picker.empty_message(), Some(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut picker = picker();
        type_str(&mut picker, "mainx");
        assert!(picker.results().is_empty());

        picker.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(picker.query(), "main");
        assert!(!picker.results().is_empty());

        picker.handle_key(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(picker.query(), "");
        assert!(picker.results().is_empty());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut picker = picker();
        type_str(&mut picker, "ma");
        assert_eq!(picker.selected(), 0);

        picker.handle_key(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(picker.selected(), 2);
        picker.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(picker.selected(), 0);
        picker.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(picker.selected(), 1);
    }

    #[test]
    fn test_query_change_resets_selection() {
        let mut picker = picker();
        type_str(&mut picker, "m");
        picker.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(picker.selected(), 1);
        type_str(&mut picker, "a");
        assert_eq!(picker.selected(), 0);
    }

    #[test]
    fn test_enter_selects_highlighted_path() {
        let mut picker = picker();
        type_str(&mut picker, "matcher");
        picker.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(picker.outcome(), Some(&Outcome::Selected("src/matcher.rs".to_string())));
        assert!(picker.should_quit());
    }

    #[test]
    fn test_enter_without_results_does_nothing() {
        let mut picker = picker();
        picker.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(!picker.should_quit());
    }

    #[test]
    fn test_escape_cancels() {
        let mut picker = picker();
        type_str(&mut picker, "main");
        picker.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(picker.outcome(), Some(&Outcome::Cancelled));
    }

    #[test]
    fn test_set_query_runs_search() {
        let mut picker = picker();
        picker.set_query("readme");
        assert_eq!(picker.results()[0].path, "README.md");
    }
}
