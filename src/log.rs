//! File logger for todo, writing to `~/.todo/todo.log`.
//!
//! The file is truncated and opened once by [`init`]; every line after that
//! goes through the same handle. Until `init` runs (unit tests, for one)
//! the `tlog*` macros are no-ops.
//!
//! Levels used across the app:
//! - ERROR: the logic thread failed
//! - WARN: a message referenced a task that no longer exists
//! - INFO: startup and exit
//! - DEBUG: store mutations, config, mode changes, commands
//! - TRACE: every key event (`--trace`)

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, OnceLock};

use crate::config::Config;

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Pick the threshold from the CLI flags and the `TODO_DEBUG` value.
    /// `--trace` wins, then `--debug` or a truthy `TODO_DEBUG`.
    pub fn resolve(debug: bool, trace: bool, env_debug: Option<&str>) -> Self {
        let env_on = env_debug
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if trace {
            LogLevel::Trace
        } else if debug || env_on {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

/// Set the threshold and open a fresh `~/.todo/todo.log`.
///
/// Failing to open the file leaves logging disabled; the app still runs.
pub fn init(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
    let Ok(dir) = Config::todo_dir() else {
        return;
    };
    if let Ok(file) = open_truncated(&dir.join("todo.log")) {
        LOG_FILE.set(Mutex::new(file)).ok();
    }
}

fn open_truncated(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

pub fn level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// True when a line at `level` would be written. The macros check this
/// before formatting.
pub fn enabled(level: LogLevel) -> bool {
    level <= self::level() && LOG_FILE.get().is_some()
}

pub fn log_at(level: LogLevel, msg: &str) {
    if level > self::level() {
        return;
    }
    if let Some(file) = LOG_FILE.get() {
        if let Ok(mut file) = file.lock() {
            let _ = write_line(&mut *file, level, msg);
        }
    }
}

fn write_line<W: Write>(out: &mut W, level: LogLevel, msg: &str) -> io::Result<()> {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    writeln!(out, "[{}] [{}] {}", timestamp, level.as_str(), msg)
}

#[macro_export]
macro_rules! tlog {
    ($($arg:tt)*) => {
        $crate::__tlog_at!($crate::log::LogLevel::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! tlog_error {
    ($($arg:tt)*) => {
        $crate::__tlog_at!($crate::log::LogLevel::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! tlog_warn {
    ($($arg:tt)*) => {
        $crate::__tlog_at!($crate::log::LogLevel::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! tlog_debug {
    ($($arg:tt)*) => {
        $crate::__tlog_at!($crate::log::LogLevel::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! tlog_trace {
    ($($arg:tt)*) => {
        $crate::__tlog_at!($crate::log::LogLevel::Trace, $($arg)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tlog_at {
    ($level:expr, $($arg:tt)*) => {
        if $crate::log::enabled($level) {
            $crate::log::log_at($level, &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_info() {
        assert_eq!(LogLevel::resolve(false, false, None), LogLevel::Info);
        assert_eq!(LogLevel::resolve(false, false, Some("0")), LogLevel::Info);
        assert_eq!(LogLevel::resolve(false, false, Some("yes")), LogLevel::Info);
    }

    #[test]
    fn test_resolve_debug_from_flag_or_env() {
        assert_eq!(LogLevel::resolve(true, false, None), LogLevel::Debug);
        assert_eq!(LogLevel::resolve(false, false, Some("1")), LogLevel::Debug);
        assert_eq!(LogLevel::resolve(false, false, Some("TRUE")), LogLevel::Debug);
    }

    #[test]
    fn test_resolve_trace_wins() {
        assert_eq!(LogLevel::resolve(false, true, None), LogLevel::Trace);
        assert_eq!(LogLevel::resolve(true, true, Some("1")), LogLevel::Trace);
    }

    #[test]
    fn test_level_from_u8_out_of_range_is_trace() {
        assert_eq!(LogLevel::from_u8(3), LogLevel::Debug);
        assert_eq!(LogLevel::from_u8(255), LogLevel::Trace);
    }

    #[test]
    fn test_write_line_format() {
        let mut out = Vec::new();
        write_line(&mut out, LogLevel::Warn, "EditTask unknown id=1234abcd").unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with('['));
        assert!(line.ends_with("] [WARN] EditTask unknown id=1234abcd\n"));
    }

    #[test]
    fn test_open_truncated_clears_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".todo").join("todo.log");
        {
            let mut file = open_truncated(&path).unwrap();
            write_line(&mut file, LogLevel::Info, "todo starting").unwrap();
        }
        assert!(!fs::read_to_string(&path).unwrap().is_empty());

        let mut file = open_truncated(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        write_line(&mut file, LogLevel::Debug, "Message::AddTask").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("[DEBUG] Message::AddTask"));
    }

    #[test]
    fn test_macros_without_init_are_noops() {
        assert!(!enabled(LogLevel::Error));
        crate::tlog_debug!("store mutated: {}", 1);
        crate::tlog!("plain info");
    }
}
