use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::container::OpResult;

/// Default number of operations kept in the log.
pub const MAX_HISTORY: usize = 64;

/// One recorded operation for the debug log panel.
#[derive(Debug, Clone)]
pub struct OpRecord {
    pub at: DateTime<Local>,
    pub label: String,
    pub outcome: OpResult,
}

impl OpRecord {
    pub fn timestamp(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }

    /// Human-readable outcome, e.g. "push 7" or "pop rejected (empty)".
    pub fn describe(&self) -> String {
        match self.outcome {
            OpResult::Inserted(digit) => format!("{} {}", self.label, digit),
            OpResult::Removed(digit) => format!("{} {}", self.label, digit),
            OpResult::Rejected => format!("{} rejected", self.label),
        }
    }
}

/// A log of recent operations that drops the oldest entry past its cap.
#[derive(Debug, Clone)]
pub struct OpLog {
    entries: VecDeque<OpRecord>,
    max_size: usize,
}

impl OpLog {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_size,
        }
    }

    pub fn record(&mut self, label: &str, outcome: OpResult) {
        self.entries.push_back(OpRecord {
            at: Local::now(),
            label: label.to_string(),
            outcome,
        });
        if self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &OpRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for OpLog {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_caps_at_max_size() {
        let mut log = OpLog::new(3);

        for digit in 0..5u8 {
            log.record("push", OpResult::Inserted(digit));
        }

        assert_eq!(log.len(), 3);
        // Oldest two entries (digits 0 and 1) were dropped
        let digits: Vec<OpResult> = log.entries().map(|r| r.outcome).collect();
        assert_eq!(
            digits,
            vec![
                OpResult::Inserted(2),
                OpResult::Inserted(3),
                OpResult::Inserted(4)
            ]
        );
    }

    #[test]
    fn test_record_descriptions() {
        let mut log = OpLog::default();
        log.record("push", OpResult::Inserted(7));
        log.record("pop", OpResult::Removed(7));
        log.record("pop", OpResult::Rejected);

        let described: Vec<String> = log.entries().map(|r| r.describe()).collect();
        assert_eq!(described, vec!["push 7", "pop 7", "pop rejected"]);
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = OpLog::default();
        log.record("enqueue", OpResult::Inserted(1));
        assert!(!log.is_empty());

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }
}
