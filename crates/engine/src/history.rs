//! Linear undo/redo log.
//!
//! Records before the cursor are applied; records after it have been undone
//! and can be redone. Pushing a new record while undone records exist drops
//! them (history is a stack, not a tree).

use crate::change::ChangeRecord;

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    records: Vec<ChangeRecord>,
    /// Number of applied records; `records[..applied]` is the current state.
    applied: usize,
    limit: Option<usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` records, dropping the oldest first.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { limit: limit.map(|n| n.max(1)), ..Self::default() }
    }

    pub fn push(&mut self, record: ChangeRecord) {
        if self.applied < self.records.len() {
            log::debug!("history: dropping {} undone record(s)", self.records.len() - self.applied);
            self.records.truncate(self.applied);
        }
        self.records.push(record);

        if let Some(limit) = self.limit {
            if self.records.len() > limit {
                let excess = self.records.len() - limit;
                self.records.drain(..excess);
            }
        }
        self.applied = self.records.len();
    }

    /// Index of the last applied record; `None` before the first.
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.records.len()
    }

    /// The record `undo` would return, without moving the cursor.
    pub fn peek_undo(&self) -> Option<&ChangeRecord> {
        self.cursor().map(|i| &self.records[i])
    }

    /// The record `redo` would return, without moving the cursor.
    pub fn peek_redo(&self) -> Option<&ChangeRecord> {
        self.records.get(self.applied)
    }

    /// Step back one record, returning it so its undo side can be applied.
    pub fn undo(&mut self) -> Option<&ChangeRecord> {
        if !self.can_undo() {
            return None;
        }
        self.applied -= 1;
        Some(&self.records[self.applied])
    }

    /// Step forward one record, returning it so its redo side can be applied.
    pub fn redo(&mut self) -> Option<&ChangeRecord> {
        if !self.can_redo() {
            return None;
        }
        self.applied += 1;
        Some(&self.records[self.applied - 1])
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.applied = 0;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.applied
    }

    pub fn redo_count(&self) -> usize {
        self.records.len() - self.applied
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Descriptions of undoable records, most recent first.
    pub fn undo_descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.records[..self.applied].iter().rev().map(ChangeRecord::description)
    }

    /// Descriptions of redoable records, next-to-redo first.
    pub fn redo_descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.records[self.applied..].iter().map(ChangeRecord::description)
    }
}
