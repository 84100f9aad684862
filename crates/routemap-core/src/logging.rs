use std::cell::Cell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Search metrics for structured logging.
///
/// Counts frontier expansions and memo table hits/misses so the exhaustive
/// searches can report how much work a query did.
#[derive(Debug, Default)]
pub struct SearchMetrics {
    /// Frontier entries (or DFS calls) expanded
    expanded: Cell<u64>,
    /// Memo table hits
    memo_hits: Cell<u64>,
    /// Memo table misses
    memo_misses: Cell<u64>,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frontier expansion
    pub fn record_expansion(&self) {
        self.expanded.set(self.expanded.get() + 1);
    }

    pub fn record_memo_hit(&self) {
        self.memo_hits.set(self.memo_hits.get() + 1);
    }

    pub fn record_memo_miss(&self) {
        self.memo_misses.set(self.memo_misses.get() + 1);
    }

    pub fn expanded(&self) -> u64 {
        self.expanded.get()
    }

    pub fn memo_hits(&self) -> u64 {
        self.memo_hits.get()
    }

    pub fn memo_misses(&self) -> u64 {
        self.memo_misses.get()
    }

    /// Memo hit rate as a percentage (0.0-100.0)
    pub fn memo_hit_rate(&self) -> f64 {
        let hits = self.memo_hits();
        let total = hits + self.memo_misses();
        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }
}

/// Log search metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let metrics = SearchMetrics::new();
/// // ... run a search ...
/// log_search_metrics!(&metrics, "longest_simple_path");
/// ```
#[macro_export]
macro_rules! log_search_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            expanded = $metrics.expanded(),
            memo_hits = $metrics.memo_hits(),
            memo_misses = $metrics.memo_misses(),
            memo_hit_rate = $metrics.memo_hit_rate(),
            "search_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", origin = origin);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "routemap=debug,routemap_core=debug",
        (false, None) => "routemap=warn,routemap_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins, then ROUTEMAP_LOG, then the CLI level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ROUTEMAP_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("routemap={level},routemap_core={level}")
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
