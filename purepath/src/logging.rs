//! Logging infrastructure for purepath tools.
//!
//! The library itself only emits `log` records. This module provides the
//! small stderr logger used by the command-line front end, with a level
//! chosen from CLI flags or the `PUREPATH_LOG_MODE` environment variable.

use std::env;
use std::fmt;

use crate::error::Error;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "PUREPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use purepath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// # Examples
///
/// ```
/// use purepath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("suffix list is empty");
/// logger.debug("not printed below Verbose");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, min: LogLevel, tag: &str, message: &str) {
        if self.level >= min {
            eprintln!("{tag}: {message}");
        }
    }

    /// Logs an error message, unless the level is Quiet.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Logs a warning message, unless the level is Quiet.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message at Verbose level.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message at Verbose level.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }

    /// Logs a library error together with its kind.
    ///
    /// At Verbose level the error kind is printed as well.
    pub fn report(&self, err: &Error) {
        if self.level >= LogLevel::Verbose {
            self.error(&format!("{err} ({})", err.kind()));
        } else {
            self.error(&err.to_string());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `PUREPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use purepath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .map_or_else(Logger::default, Logger::new)
}
