//! Event log with levels for on-device inspection.
//!
//! Each [`ClockFace`](crate::face::ClockFace) owns an [`EventLog`]: a ring
//! buffer of the most recent engine events that the host can drain and show
//! or print. With the `defmt` feature enabled every entry is also forwarded
//! to `defmt` at the matching level.
//!
//! # Usage
//!
//! ```ignore
//! use modernesque::{log_info, log_warn};
//!
//! log_info!(self.log, "Style applied");
//! log_debug!(self.log, "Angles {}:{}", hour, minute);
//! ```

use heapless::{Deque, String};

use crate::config::{LOG_ENTRIES, LOG_MSG_LEN};

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Single-character prefix for compact output.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// Formatting buffer used by the log macros.
pub type MessageBuf = String<LOG_MSG_LEN>;

/// A single log entry.
#[derive(Clone, Debug, Default)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to [`LOG_MSG_LEN`] - 1 characters.
    pub message: MessageBuf,
}

impl LogEntry {
    pub fn new(
        level: LogLevel,
        message: &str,
    ) -> Self {
        let mut msg = MessageBuf::new();
        for (i, c) in message.chars().enumerate() {
            if i >= LOG_MSG_LEN - 1 {
                break;
            }
            msg.push(c).ok();
        }
        Self { level, message: msg }
    }
}

/// Ring buffer of recent entries. The oldest entry is dropped when full.
#[derive(Default)]
pub struct EventLog {
    buffer: Deque<LogEntry, LOG_ENTRIES>,
}

impl EventLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(LogEntry::new(level, message)).ok();
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.buffer.iter() }

    /// Remove and return the oldest entry.
    pub fn pop(&mut self) -> Option<LogEntry> { self.buffer.pop_front() }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:ident, $defmt:ident, $log:expr, $($arg:tt)*) => {{
        use core::fmt::Write;
        let mut buf = $crate::log::MessageBuf::new();
        write!(buf, $($arg)*).ok();
        $log.push($crate::log::LogLevel::$level, buf.as_str());
        #[cfg(feature = "defmt")]
        defmt::$defmt!($($arg)*);
    }};
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($log:expr, $($arg:tt)*) => { $crate::__log_at!(Info, info, $log, $($arg)*) };
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($log:expr, $($arg:tt)*) => { $crate::__log_at!(Debug, debug, $log, $($arg)*) };
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($log:expr, $($arg:tt)*) => { $crate::__log_at!(Warn, warn, $log, $($arg)*) };
}

// =============================================================================
// Unit Tests
// =============================================================================
