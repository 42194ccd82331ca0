#![cfg(feature = "std")]
//! Stderr logger for the terminal game.
//!
//! `SEABATTLE_LOG` holds comma separated directives: a bare level such as
//! `debug` sets the level for this crate, `target=level` sets it for a
//! target and everything under it. Records from other targets are dropped
//! unless a directive names them.

use std::env;

use log::{LevelFilter, Metadata, Record};

/// Environment variable read by [`init_logging`].
pub const LOG_ENV: &str = "SEABATTLE_LOG";

const CRATE_TARGET: &str = "seabattle";

/// Per-target level filter parsed from a directive string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    directives: Vec<(String, LevelFilter)>,
}

impl LogFilter {
    /// Parse `input`. Malformed directives are skipped; an empty result
    /// falls back to `warn` for this crate.
    pub fn parse(input: &str) -> Self {
        let mut directives = Vec::new();
        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (target, level) = match part.split_once('=') {
                Some((target, level)) => (target.trim(), level.trim()),
                None => (CRATE_TARGET, part),
            };
            if target.is_empty() {
                continue;
            }
            if let Ok(level) = level.parse::<LevelFilter>() {
                directives.push((target.to_string(), level));
            }
        }
        if directives.is_empty() {
            directives.push((CRATE_TARGET.to_string(), LevelFilter::Warn));
        }
        // longest prefix wins
        directives.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        LogFilter { directives }
    }

    /// Level enabled for `target`. `Off` when no directive covers it.
    pub fn level_for(&self, target: &str) -> LevelFilter {
        self.directives
            .iter()
            .find(|(prefix, _)| {
                target == prefix
                    || target
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            })
            .map_or(LevelFilter::Off, |(_, level)| *level)
    }

    /// Most verbose level of any directive.
    pub fn max_level(&self) -> LevelFilter {
        self.directives
            .iter()
            .map(|(_, level)| *level)
            .max()
            .unwrap_or(LevelFilter::Off)
    }
}

struct StderrLogger {
    filter: LogFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger with directives from `SEABATTLE_LOG`.
/// Only the first call has any effect.
pub fn init_logging() {
    let filter = LogFilter::parse(&env::var(LOG_ENV).unwrap_or_default());
    let max = filter.max_level();
    if log::set_boxed_logger(Box::new(StderrLogger { filter })).is_ok() {
        log::set_max_level(max);
    }
}
