//! In-app event journal.
//!
//! The only log surface the game has: sync results, roll outcomes, saved
//! recipes and provider failures all land here and are rendered in the
//! footer. Capacity-bounded so an idle overnight session cannot grow it.

use std::collections::VecDeque;

use crate::constants::JOURNAL_CAPACITY;

#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub message: String,
    /// Highlighted entries render in the accent color (rewards, crits).
    pub highlight: bool,
}

#[derive(Debug, Clone)]
pub struct Journal {
    entries: VecDeque<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(JOURNAL_CAPACITY),
        }
    }

    pub fn add(&mut self, message: impl Into<String>, highlight: bool) {
        if self.entries.len() >= JOURNAL_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(JournalEntry {
            message: message.into(),
            highlight,
        });
    }

    /// Newest first, for the footer which renders top-down.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().rev().take(count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_recent_order() {
        let mut journal = Journal::new();
        journal.add("premier", false);
        journal.add("second", true);

        let recent: Vec<&str> = journal.recent(5).map(|e| e.message.as_str()).collect();
        assert_eq!(recent, vec!["second", "premier"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut journal = Journal::new();
        for i in 0..(JOURNAL_CAPACITY + 10) {
            journal.add(format!("entrée {}", i), false);
        }
        assert_eq!(journal.len(), JOURNAL_CAPACITY);
        let newest = journal.recent(1).next().unwrap();
        assert_eq!(newest.message, format!("entrée {}", JOURNAL_CAPACITY + 9));
    }
}
