//! Logging Infrastructure
//!
//! Console output (plain or JSON) plus a daily-rotated file under the
//! working directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Default filter when `RUST_LOG` is unset
fn default_filter(level: &str) -> String {
    format!("booking_server={level},shared={level},tower_http={level},security={level},warn")
}

/// Initialize the global logger
///
/// `RUST_LOG` takes precedence over `level`. The returned guard flushes the
/// file writer on drop and must be held for the process lifetime.
pub fn init_logger(level: &str, json: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    layers.push(if json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().with_target(false).boxed()
    });

    let mut guard = None;
    if let Some(dir) = log_dir {
        match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, "booking-server.log");
                let (writer, file_guard) = tracing_appender::non_blocking(appender);
                layers.push(fmt::layer().with_ansi(false).with_writer(writer).boxed());
                guard = Some(file_guard);
            }
            Err(e) => eprintln!("Cannot create log directory {}: {}", dir.display(), e),
        }
    }

    // Ignore a second initialization (tests)
    let _ = tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init();

    guard
}
