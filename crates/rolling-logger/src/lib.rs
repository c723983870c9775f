//! Rolling Logger
//!
//! `log` backend for browser apps. Lines go to the developer console
//! (stderr off wasm) and the newest ones are kept in a bounded ring so the
//! UI can show recent activity.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept in the ring
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Fixed-size buffer that drops its oldest line when full
#[derive(Debug)]
pub struct LineRing {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Newest `n` lines, oldest first
    pub fn newest(&self, n: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct RollingLogger {
    app: String,
    level: LevelFilter,
    ring: Mutex<LineRing>,
}

impl RollingLogger {
    pub fn new(app: impl Into<String>, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app: app.into(),
            level,
            ring: Mutex::new(LineRing::new(capacity)),
        }
    }

    pub fn newest(&self, n: usize) -> Vec<String> {
        self.ring.lock().map(|ring| ring.newest(n)).unwrap_or_default()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_console(record.level(), &format!("[{}] {}", self.app, line));
        if let Ok(mut ring) = self.ring.lock() {
            ring.push(line);
        }
    }

    fn flush(&self) {}
}

/// `[HH:MM:SS.mmm] LEVEL target: message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger as the global `log` backend
pub fn init_logger(app: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Newest `n` lines logged since `init_logger`
pub fn recent_lines(n: usize) -> Vec<String> {
    LOGGER.get().map(|logger| logger.newest(n)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("12:00:01.250", Level::Warn, "board_core", "stale target");
        assert_eq!(line, "[12:00:01.250] WARN  board_core: stale target");
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let mut ring = LineRing::new(3);
        for i in 0..5 {
            ring.push(format!("line {}", i));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.newest(10), vec!["line 2", "line 3", "line 4"]);
        assert_eq!(ring.newest(1), vec!["line 4"]);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = RollingLogger::new("test", LevelFilter::Info, 10);
        logger.log(&Record::builder().level(Level::Debug).args(format_args!("hidden")).build());
        logger.log(&Record::builder().level(Level::Info).target("t").args(format_args!("shown")).build());
        let lines = logger.newest(10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("t: shown"));
    }
}
