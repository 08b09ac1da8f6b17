//! Operations log
//!
//! Timestamped, append-only audit trail of mutations. Entries are only ever
//! appended, so append order is chronological order.

use crate::core::traits::Clock;
use crate::io::RecordStore;
use crate::types::{LogEntry, PlantError, TIMESTAMP_FORMAT};

/// Appends and reads operations log entries
#[derive(Clone, Copy)]
pub struct OperationsLog<'a> {
    store: RecordStore<'a>,
    clock: &'a dyn Clock,
}

impl<'a> OperationsLog<'a> {
    pub fn new(store: RecordStore<'a>, clock: &'a dyn Clock) -> Self {
        OperationsLog { store, clock }
    }

    /// Append an entry stamped with the current time
    ///
    /// # Arguments
    ///
    /// * `operation` - Short tag, e.g. `add_batch`
    /// * `details` - Free text; may contain commas
    ///
    /// # Returns
    ///
    /// The entry as written.
    pub fn log_operation(&self, operation: &str, details: &str) -> Result<LogEntry, PlantError> {
        let entry = LogEntry {
            timestamp: self.clock.now().format(TIMESTAMP_FORMAT).to_string(),
            operation: operation.to_string(),
            details: details.replace(['\n', '\r'], " "),
        };
        self.store.append(&entry)?;
        Ok(entry)
    }

    /// The last `count` entries, newest first
    ///
    /// Returns every entry when fewer than `count` exist, and an empty list
    /// when the log has never been written.
    pub fn recent_logs(&self, count: usize) -> Result<Vec<LogEntry>, PlantError> {
        let entries = self.store.read_all::<LogEntry>()?;
        Ok(entries.into_iter().rev().take(count).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FixedClock;
    use crate::io::{Collection, InMemoryStorage};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2023, 6, 10)
                .and_then(|d| d.and_hms_opt(9, 15, 0))
                .unwrap(),
        )
    }

    fn storage_with_entries(count: usize) -> InMemoryStorage {
        let contents: String = (1..=count)
            .map(|i| format!("2023-06-10 09:00:{:02},op{},entry {}\n", i, i, i))
            .collect();
        InMemoryStorage::new().with_contents(Collection::Operations, &contents)
    }

    #[test]
    fn test_log_operation_appends_timestamped_line() {
        let storage = InMemoryStorage::new();
        let clock = clock();
        let log = OperationsLog::new(RecordStore::new(&storage), &clock);

        let entry = log.log_operation("add_batch", "Added batch B500").unwrap();

        assert_eq!(entry.timestamp, "2023-06-10 09:15:00");
        assert_eq!(
            storage.contents(Collection::Operations).as_deref(),
            Some("2023-06-10 09:15:00,add_batch,Added batch B500\n")
        );
    }

    #[test]
    fn test_log_operation_keeps_commas_in_details() {
        let storage = InMemoryStorage::new();
        let clock = clock();
        let log = OperationsLog::new(RecordStore::new(&storage), &clock);

        log.log_operation("note", "B001, B002, B003").unwrap();

        let entries = log.recent_logs(1).unwrap();
        assert_eq!(entries[0].details, "B001, B002, B003");
    }

    #[test]
    fn test_log_operation_flattens_line_breaks() {
        let storage = InMemoryStorage::new();
        let clock = clock();
        let log = OperationsLog::new(RecordStore::new(&storage), &clock);

        log.log_operation("note", "first\nsecond").unwrap();

        let entries = log.recent_logs(5).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].details, "first second");
    }

    #[rstest]
    #[case::fewer_than_available(10, 5, 5)]
    #[case::exactly_available(3, 3, 3)]
    #[case::more_than_available(2, 5, 2)]
    #[case::zero_requested(4, 0, 0)]
    #[case::empty_log(0, 5, 0)]
    fn test_recent_logs_count(
        #[case] stored: usize,
        #[case] requested: usize,
        #[case] expected: usize,
    ) {
        let storage = storage_with_entries(stored);
        let clock = clock();
        let log = OperationsLog::new(RecordStore::new(&storage), &clock);

        assert_eq!(log.recent_logs(requested).unwrap().len(), expected);
    }

    #[test]
    fn test_recent_logs_newest_first() {
        let storage = storage_with_entries(4);
        let clock = clock();
        let log = OperationsLog::new(RecordStore::new(&storage), &clock);

        let operations: Vec<_> = log
            .recent_logs(3)
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();

        assert_eq!(operations, vec!["op4", "op3", "op2"]);
    }

    #[test]
    fn test_recent_logs_missing_log_is_empty() {
        let storage = InMemoryStorage::new();
        let clock = clock();
        let log = OperationsLog::new(RecordStore::new(&storage), &clock);

        assert!(log.recent_logs(5).unwrap().is_empty());
    }
}
