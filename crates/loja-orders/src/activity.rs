//! # Activity Log
//!
//! Where the service reports what it did ("Pedido criado - ID: 1, ...").

use std::fmt::Debug;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::info;

/// Receives one human-readable line per service action.
pub trait ActivityLog: Send + Sync + Debug {
    fn record(&self, message: &str);
}

/// Emits each message as a `tracing` info event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ActivityLog for TracingLog {
    fn record(&self, message: &str) {
        info!(target: "loja::activity", "{message}");
    }
}

/// Prints `[LOG] <message>` to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog;

impl ConsoleLog {
    pub fn format(message: &str) -> String {
        format!("[LOG] {message}")
    }
}

impl ActivityLog for ConsoleLog {
    fn record(&self, message: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", Self::format(message)) {
            tracing::warn!(error = %e, "Failed to write activity log line");
        }
    }
}

/// Keeps messages in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    messages: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ActivityLog for MemoryLog {
    fn record(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_format() {
        assert_eq!(
            ConsoleLog::format("Pedido criado - ID: 1, Cliente: Maria"),
            "[LOG] Pedido criado - ID: 1, Cliente: Maria"
        );
    }

    #[test]
    fn test_memory_log_keeps_order() {
        let log = MemoryLog::new();
        log.record("a");
        log.record("b");
        assert_eq!(log.messages(), vec!["a".to_string(), "b".to_string()]);
    }
}
