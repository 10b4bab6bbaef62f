//! In-memory capturing adapter.

use parking_lot::Mutex;
use std::fmt::Arguments;

use crate::log::{Adapter, Category, LogLevel};

/// A record captured by [`MemoryAdapter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub category: Category,
    pub level: LogLevel,
    pub message: String,
}

/// Adapter that keeps every record in memory.
///
/// Useful for tests that assert on emitted output and for applications that
/// display recent log lines themselves.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryAdapter {
    /// Create an empty memory adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every captured record, oldest first.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Captured messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns true when nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return every captured record.
    pub fn drain(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl Adapter for MemoryAdapter {
    fn log(&self, category: &Category, level: LogLevel, args: Arguments<'_>) {
        let record = CapturedRecord {
            category: category.clone(),
            level,
            message: args.to_string(),
        };
        self.records.lock().push(record);
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_adapter_captures_in_order() {
        let adapter = MemoryAdapter::new();
        let category = Category::new("app");

        adapter.log(&category, LogLevel::Info, format_args!("one"));
        adapter.log(&category, LogLevel::Error, format_args!("two {}", 2));

        let records = adapter.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, LogLevel::Info);
        assert_eq!(records[1].message, "two 2");
        assert_eq!(records[1].category, category);
    }

    #[test]
    fn test_memory_adapter_drain() {
        let adapter = MemoryAdapter::new();
        adapter.log(&Category::new("app"), LogLevel::Debug, format_args!("x"));

        assert_eq!(adapter.drain().len(), 1);
        assert!(adapter.is_empty());
        assert_eq!(adapter.len(), 0);
    }
}
