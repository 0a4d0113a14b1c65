use std::collections::VecDeque;

use log::trace;

/// Maximum number of undo steps kept
pub const HISTORY_LIMIT: usize = 50;

/// What kind of action recorded a snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryKind {
    /// arithmetic
    Operation,
    /// enter, duplicate, drop and swap
    StackOperation,
}

/// Engine state captured right before an action mutated it
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub kind: HistoryKind,
    pub stack_before: Vec<f64>,
    pub input_before: String,
    pub operation: Option<String>,
}

/// Bounded undo log: appended at the tail, the oldest entries are evicted
/// from the head, undo takes from the tail
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: VecDeque::with_capacity(HISTORY_LIMIT + 1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Copies `stack` and `input`, so later mutation cannot reach the snapshot
    pub fn save(&mut self, kind: HistoryKind, name: &str, stack: &[f64], input: &str) {
        self.entries.push_back(HistoryEntry {
            kind,
            stack_before: stack.to_vec(),
            input_before: input.to_string(),
            operation: Some(name.to_string()),
        });
        trace!("history: saved '{}' ({} entries)", name, self.entries.len());

        while self.entries.len() > HISTORY_LIMIT {
            if let Some(old) = self.entries.pop_front() {
                trace!("history: evicted {:?}", old.operation);
            }
        }
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
