//! Recently opened files and the quick switcher over them

/// Visited files remembered per repository
pub const MAX_VISITED: usize = 15;

/// Entries offered by the quick switcher
pub const SWITCHER_SIZE: usize = 10;

/// Stack of visited files, most recent on top
#[derive(Debug, Clone, Default)]
pub struct FileHistory {
    stack: Vec<String>,
    /// Switcher selection, index into `recent()`; `None` while closed
    cycle: Option<usize>,
}

impl FileHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `path` was opened, moving it to the top
    pub fn visit(&mut self, path: &str) {
        self.stack.retain(|p| p != path);
        self.stack.push(path.to_string());
        if self.stack.len() > MAX_VISITED {
            self.stack.remove(0);
        }
    }

    /// Forget everything, e.g. when another repository is loaded
    pub fn reset(&mut self) {
        self.stack.clear();
        self.cycle = None;
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Most recent first, at most [`SWITCHER_SIZE`] entries
    pub fn recent(&self) -> Vec<&str> {
        self.stack
            .iter()
            .rev()
            .take(SWITCHER_SIZE)
            .map(String::as_str)
            .collect()
    }

    pub fn is_cycling(&self) -> bool {
        self.cycle.is_some()
    }

    /// Index into `recent()` currently highlighted by the switcher
    pub fn cycle_index(&self) -> Option<usize> {
        self.cycle
    }

    /// Open the switcher on the previously opened file.
    /// Returns false when there is nothing to switch to.
    pub fn begin_cycle(&mut self) -> bool {
        if self.stack.len() < 2 {
            return false;
        }
        self.cycle = Some(1);
        true
    }

    /// Move the switcher selection, wrapping at both ends
    pub fn cycle(&mut self, forward: bool) {
        let Some(current) = self.cycle else {
            return;
        };
        let max = self.stack.len().min(SWITCHER_SIZE) - 1;
        let next = if forward {
            if current >= max { 0 } else { current + 1 }
        } else if current == 0 {
            max
        } else {
            current - 1
        };
        self.cycle = Some(next);
    }

    /// Close the switcher and return the chosen file unless it is already open
    pub fn finish_cycle(&mut self, current: Option<&str>) -> Option<String> {
        let idx = self.cycle.take()?;
        let chosen = self.recent().get(idx).map(|p| p.to_string())?;
        if current == Some(chosen.as_str()) {
            return None;
        }
        Some(chosen)
    }

    pub fn cancel_cycle(&mut self) {
        self.cycle = None;
    }
}
