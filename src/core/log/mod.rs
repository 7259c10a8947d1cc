use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Outcome of a queue operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    Rejected,
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub log_id: u64,
    pub op: String,              // "insert_head", "remove_head", ...
    pub value: Option<String>,   // The value being inserted/removed
    pub outcome: Outcome,
    pub detail: Option<String>,  // Rejection reason or truncation note
    pub size_after: usize,       // Queue size once the call returned
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ log_id: {}, op: {}, value: {:?}, outcome: {:?}, detail: {:?}, size_after: {} }}",
            self.log_id, self.op, self.value, self.outcome, self.detail, self.size_after,
        )
    }
}

#[derive(Clone, Debug, Default)]
/// Logger storing all entries
pub struct Logger {
    pub(crate) entries: Vec<LogEntry>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Log an operation
    pub fn log(
        &mut self,
        op: &str,
        value: Option<&str>,
        outcome: Outcome,
        detail: Option<String>,
        size_after: usize,
    ) {
        // --- Negative-space assertion: op validity ---
        assert!(
            matches!(
                op,
                "create"
                    | "destroy"
                    | "insert_head"
                    | "insert_tail"
                    | "remove_head"
                    | "reverse"
                    | "sort"
            ),
            "Operation must belong to the queue surface"
        );

        // --- Negative-space assertion: rejected calls carry a reason ---
        if outcome == Outcome::Rejected {
            assert!(detail.is_some(), "Rejected operations must record a reason");
        }

        let log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry {
            log_id,
            op: op.into(),
            value: value.map(str::to_owned),
            outcome,
            detail,
            size_after,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}

pub fn append_logs(log: &[LogEntry], path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    for entry in log {
        let json = serde_json::to_string(entry).expect("Serialization failed");
        writeln!(file, "{}", json)?; // one JSON object per line
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_the_operation() {
        let mut logger = Logger::new();
        logger.log("insert_tail", Some("apple"), Outcome::Applied, None, 1);
        let line = logger.entries()[0].to_string();
        assert!(line.contains("insert_tail"), "op name must appear: {line}");
        assert!(line.contains("apple"), "value must appear: {line}");
        assert!(line.contains("size_after: 1"), "size must appear: {line}");
    }

    #[test]
    fn rejected_entries_keep_their_reason() {
        let mut logger = Logger::new();
        logger.log(
            "sort",
            None,
            Outcome::Rejected,
            Some("queue handle is absent".to_owned()),
            0,
        );
        let entry = &logger.entries()[0];
        assert_eq!(entry.outcome, Outcome::Rejected);
        assert_eq!(entry.detail.as_deref(), Some("queue handle is absent"));
    }
}
