//! Logging Setup
//!
//! Human-readable logs on stderr, plus an optional daily-rolling file in the
//! data directory.

use crate::connection::LogConfig;
use crate::constants::LOG_FILE_PREFIX;
use crate::helpers::get_or_create_data_dir;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn default_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Stderr-only subscriber for the work done before the config is loaded.
///
/// Use it scoped, with `tracing::subscriber::with_default`, so
/// [`init_logging`] can still install the global one afterwards.
pub fn bootstrap_subscriber(verbose: bool) -> impl Subscriber + Send + Sync + 'static {
    let filter = default_filter(if verbose { "debug" } else { "info" });
    stderr_subscriber(filter, std::io::stderr)
}

fn stderr_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_target(false))
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level; `verbose` raises the default
/// to `debug`. Keep the returned guard alive until exit so the file writer
/// flushes.
pub fn init_logging(config: &LogConfig, verbose: bool) -> Option<WorkerGuard> {
    let default_directive = if verbose { "debug" } else { config.level.as_str() };
    let filter = default_filter(default_directive);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let mut guard = None;
    let file_layer = if config.file {
        match get_or_create_data_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, worker_guard) = tracing_appender::non_blocking(appender);
                guard = Some(worker_guard);
                Some(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_timer(LocalTime::rfc_3339()),
                )
            }
            Err(e) => {
                eprintln!("Log file disabled: {e}");
                None
            }
        }
    } else {
        None
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Logging already initialized: {e}");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConsoleConfig;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut inner) = self.0.lock() {
                inner.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn config_load_events_reach_the_bootstrap_subscriber() {
        let path =
            std::env::temp_dir().join(format!("idm-console-log-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "request_timeout_secs = 5").expect("write config");

        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = stderr_subscriber(EnvFilter::new("info"), move || writer.clone());
        let config = tracing::subscriber::with_default(subscriber, || {
            ConsoleConfig::load_from(&path)
        })
        .expect("load config");
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.request_timeout_secs, 5);
        let logged = String::from_utf8(buf.0.lock().expect("buffer lock").clone()).expect("utf8");
        assert!(logged.contains("Loading config file"), "logged: {logged}");
    }
}
