//! Recently loaded repository URLs, persisted as a JSON array

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Error, Result};

pub const MAX_HISTORY_ITEMS: usize = 10;

/// `$XDG_DATA_HOME/repo-lens/history.json`
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("repo-lens/history.json"))
}

/// Most recent first, no duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    items: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read history from `path`. A missing or unreadable file yields an empty
    /// history; problems other than absence are logged.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::new(),
            Err(e) => {
                warn!("failed to read search history {}: {}", path.display(), e);
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(mut items) => {
                items.truncate(MAX_HISTORY_ITEMS);
                Self { items }
            }
            Err(e) => {
                warn!("failed to parse search history {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json = serde_json::to_string(&self.items)?;
        std::fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Put `url` on top, dropping an older copy and the oldest overflow
    pub fn add(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        self.items.retain(|item| item != url);
        self.items.insert(0, url.to_string());
        self.items.truncate(MAX_HISTORY_ITEMS);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_add_moves_existing_to_front() {
        let mut history = SearchHistory::new();
        history.add("https://github.com/a/one");
        history.add("https://github.com/a/two");
        history.add("https://github.com/a/one");
        assert_eq!(
            history.items(),
            ["https://github.com/a/one", "https://github.com/a/two"]
        );
    }

    #[test]
    fn test_add_ignores_empty_and_caps_length() {
        let mut history = SearchHistory::new();
        history.add("");
        assert!(history.is_empty());

        for i in 0..15 {
            history.add(&format!("https://github.com/o/r{i}"));
        }
        assert_eq!(history.items().len(), MAX_HISTORY_ITEMS);
        assert_eq!(history.items()[0], "https://github.com/o/r14");
        assert_eq!(history.items()[9], "https://github.com/o/r5");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data/history.json");

        let mut history = SearchHistory::new();
        history.add("https://github.com/rust-lang/rust");
        history.save(&path).unwrap();

        assert_eq!(SearchHistory::load(&path), history);
    }

    #[test]
    fn test_missing_or_corrupt_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(SearchHistory::load(&temp_dir.path().join("absent.json")).is_empty());

        let path = temp_dir.path().join("history.json");
        fs::write(&path, "{\"not\": \"an array\"}").unwrap();
        assert!(SearchHistory::load(&path).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = SearchHistory::new();
        history.add("https://github.com/a/b");
        history.clear();
        assert!(history.is_empty());
    }
}
