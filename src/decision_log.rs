// Decision logging module.
//
// Opt-in JSONL trace of every decision an agent makes: one line per turn
// with the chosen action and its backed-up value. Writes are synchronous
// (the core is single-threaded and a decision is logged after the search
// returns, never during it); failures are reported through the log facade
// and otherwise ignored so a full disk can't break move selection.

use log::error;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;

use crate::config::Config;
use crate::types::Decision;

/// A single decision log entry
#[derive(Debug, Serialize)]
struct DecisionLogEntry<'a> {
    turn: u32,
    agent: &'a str,
    action: &'a str,
    value: f64,
    timestamp: String,
}

pub struct DecisionLogger {
    file: Option<File>,
}

impl DecisionLogger {
    /// Creates a new decision logger.
    /// If enabled, initializes the log file (truncating if it exists).
    pub fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return DecisionLogger { file: None };
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
        {
            Ok(file) => {
                log::info!("Decision logging enabled: {}", log_file_path);
                DecisionLogger { file: Some(file) }
            }
            Err(e) => {
                error!("Failed to create decision log file '{}': {}", log_file_path, e);
                DecisionLogger { file: None }
            }
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.decision_log.enabled,
            &config.decision_log.log_file_path,
        )
    }

    /// Creates a disabled decision logger (no-op)
    pub fn disabled() -> Self {
        DecisionLogger { file: None }
    }

    /// Appends one JSONL line for a decision
    pub fn log_decision(&mut self, turn: u32, agent: &str, decision: &Decision) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        let entry = DecisionLogEntry {
            turn,
            agent,
            action: decision.action.as_str(),
            value: decision.value,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        match serde_json::to_string(&entry) {
            Ok(json_line) => {
                if let Err(e) = writeln!(file, "{}", json_line) {
                    error!("Failed to write decision log entry: {}", e);
                } else if let Err(e) = file.flush() {
                    error!("Failed to flush decision log: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize decision log entry: {}", e);
            }
        }
    }
}
