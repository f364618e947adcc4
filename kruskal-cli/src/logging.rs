//! Diagnostics setup for the `kruskal` binary.
//!
//! The MST itself is printed on stdout; every `tracing` event (including the
//! per-edge `trace!` decisions from `kruskal-core`) goes to stderr through a
//! single global subscriber. Records from crates that still use `log` are
//! forwarded into the same pipeline.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Selects the stderr rendering: `human` (default) or `json`.
const LOG_FORMAT_ENV: &str = "KRUSKAL_LOG_FORMAT";

/// Filter applied when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Rendering of diagnostics on stderr.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Compact text lines for interactive use.
    #[default]
    Human,
    /// Newline-delimited JSON; each record carries the enclosing
    /// `cli.run` / `mst.compute` spans.
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, LoggingError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }

    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => Self::parse(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }

    /// Builds the stderr layer; span closes are reported so the duration of
    /// each MST computation shows up in the output.
    fn stderr_layer<S>(self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let layer = tracing_subscriber::fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr);
        match self {
            Self::Human => layer.boxed(),
            Self::Json => layer
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .boxed(),
        }
    }
}

/// Failures while setting up diagnostics.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `KRUSKAL_LOG_FORMAT` was set to bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// The variable that was read.
        name: &'static str,
        /// Lookup failure reported by `std::env`.
        #[source]
        source: env::VarError,
    },
    /// `KRUSKAL_LOG_FORMAT` named something other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// The normalised value that was rejected.
        provided: String,
    },
    /// Another global subscriber was already registered.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error returned by `try_init`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Routes diagnostics to stderr; safe to call more than once.
///
/// `RUST_LOG` picks the level (`info` by default, `kruskal_core=trace` to see
/// every accepted and rejected edge) and `KRUSKAL_LOG_FORMAT` picks the
/// rendering.
///
/// # Errors
/// Returns [`LoggingError`] when `KRUSKAL_LOG_FORMAT` is not valid UTF-8 or
/// names an unknown format. Finding a subscriber already installed (as in
/// tests) is not an error; the existing one is kept.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let format = LogFormat::from_env()?;
    match install(format) {
        Ok(()) | Err(LoggingError::InstallFailed { .. }) => {}
        Err(err) => return Err(err),
    }
    let _ = INSTALLED.set(());
    Ok(())
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // The `log` slot may already be taken; tracing output still works.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(format.stderr_layer())
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
