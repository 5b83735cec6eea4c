//! Structured logging support for the modify engine
//!
//! The engine emits `tracing` events: one `debug` summary per modify with
//! applied and discarded counts, and one `trace` event per discarded update
//! cell. This module configures a subscriber for applications that want to
//! see them.
//!
//! # Example
//!
//! ```no_run
//! use celltensor_exec::tracing_support::{init_tracing, TracingConfig, TracingFormat};
//!
//! init_tracing(TracingConfig {
//!     format: TracingFormat::Compact,
//!     filter: "celltensor_exec=trace".to_string(),
//!     ..TracingConfig::default()
//! })
//! .unwrap();
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Filter directive (default `celltensor_exec=info,warn`)
//! - `CELLTENSOR_LOG_FORMAT`: Output format (`pretty`, `json` or `compact`,
//!   default: `pretty`)
//!
//! Without the `tracing` feature every function here is a no-op.

use crate::modify::{Discard, ModifyStats};
use anyhow::Result;
use celltensor_core::Address;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "CELLTENSOR_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "celltensor_exec=info,warn";

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Pretty-printed human-readable format
    Pretty,
    /// JSON format for structured logging
    Json,
    /// Compact format (single line per event)
    Compact,
}

impl TracingFormat {
    /// Parse from string, falling back to `Pretty`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Output format
    pub format: TracingFormat,
    /// Filter directive (e.g., "celltensor_exec=trace")
    pub filter: String,
    /// Enable ANSI colors
    pub with_ansi: bool,
    /// Show target module paths
    pub with_target: bool,
    /// Show file locations
    pub with_file: bool,
    /// Show line numbers
    pub with_line_number: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let format = std::env::var(LOG_FORMAT_ENV)
            .map(|s| TracingFormat::parse(&s))
            .unwrap_or(TracingFormat::Pretty);
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
            with_file: false,
            with_line_number: false,
        }
    }
}

/// Install a global subscriber with the given configuration
///
/// Call once at application startup.
///
/// # Errors
///
/// Returns an error for an invalid filter directive or if a global
/// subscriber is already set.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        TracingFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}

/// Stub for when tracing feature is disabled
#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: TracingConfig) -> Result<()> {
    Ok(())
}

/// Record the outcome of one modify
#[cfg(feature = "tracing")]
pub fn record_modify(representation: &str, stats: &ModifyStats) {
    tracing::debug!(
        representation = representation,
        applied = stats.applied,
        discarded = stats.discarded(),
        unresolvable = stats.unresolvable,
        out_of_range = stats.out_of_range,
        unknown_key = stats.unknown_key,
        "modify_completed"
    );
}

/// Stub for when tracing is disabled
#[cfg(not(feature = "tracing"))]
pub fn record_modify(_representation: &str, _stats: &ModifyStats) {}

/// Record one discarded update cell
#[cfg(feature = "tracing")]
pub fn record_discard(address: &Address, reason: Discard) {
    tracing::trace!(address = %address, reason = %reason, "update_discarded");
}

/// Stub for when tracing is disabled
#[cfg(not(feature = "tracing"))]
pub fn record_discard(_address: &Address, _reason: Discard) {}

#[cfg(test)]
#[cfg(feature = "tracing")]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_format_parse() {
        assert_eq!(TracingFormat::parse("json"), TracingFormat::Json);
        assert_eq!(TracingFormat::parse("PRETTY"), TracingFormat::Pretty);
        assert_eq!(TracingFormat::parse("compact"), TracingFormat::Compact);
        assert_eq!(TracingFormat::parse("unknown"), TracingFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert!(config.with_ansi);
        assert!(config.with_target);
        assert!(!config.filter.is_empty());
    }

    #[test]
    fn test_record_helpers() {
        record_modify("dense", &ModifyStats::default());
        record_discard(&Address::new(["a"]), Discard::UnknownKey);
    }
}
