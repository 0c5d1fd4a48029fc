//! Execution context for a flow run
//!
//! Holds the run's identity and the run logger. Every message is emitted
//! through `tracing` and also kept in an in-memory buffer so the run's output
//! can be inspected after the fact.

use hello_core::domain::log::{LogEntry, LogLevel};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Context shared by the tasks of a single flow run
pub struct FlowRunContext {
    /// Flow being executed
    pub flow_name: String,

    /// Identifier of this run
    pub run_id: Uuid,

    /// Log buffer with entries
    log_buffer: Mutex<Vec<LogEntry>>,
}

impl FlowRunContext {
    /// Creates a context for a new run of `flow_name`
    pub fn new(flow_name: impl Into<String>) -> Self {
        Self {
            flow_name: flow_name.into(),
            run_id: Uuid::new_v4(),
            log_buffer: Mutex::new(Vec::new()),
        }
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.log_buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn add_log(&self, level: LogLevel, message: String) {
        self.buffer().push(LogEntry {
            timestamp: chrono::Utc::now(),
            level,
            message,
        });
    }

    /// Logs a debug message
    pub fn log_debug(&self, message: String) {
        tracing::debug!(flow = %self.flow_name, run_id = %self.run_id, "{}", message);
        self.add_log(LogLevel::Debug, message);
    }

    /// Logs an info message
    pub fn log_info(&self, message: String) {
        tracing::info!(flow = %self.flow_name, run_id = %self.run_id, "{}", message);
        self.add_log(LogLevel::Info, message);
    }

    /// Logs a warning message
    pub fn log_warning(&self, message: String) {
        tracing::warn!(flow = %self.flow_name, run_id = %self.run_id, "{}", message);
        self.add_log(LogLevel::Warning, message);
    }

    /// Runs a named task to completion within this flow run
    pub fn run_task<T>(&self, task_name: &str, task: impl FnOnce() -> T) -> T {
        self.log_debug(format!("Task run '{}' started", task_name));
        let output = task();
        self.log_debug(format!("Task run '{}' completed", task_name));
        output
    }

    /// Drains all log entries from the buffer
    pub fn drain_logs(&self) -> Vec<LogEntry> {
        self.buffer().drain(..).collect()
    }
}

/// Formats the entries at or above `min_level` for printing, oldest first
pub fn run_log_lines(entries: &[LogEntry], min_level: LogLevel) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.level >= min_level)
        .map(ToString::to_string)
        .collect()
}
