//! Tracing initialization: fmt layer with level, target, span and all fields, written to stdout and
//! optionally tee'd to a log file.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan,
    fmt::writer::{BoxMakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Default filter directive when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global tracing subscriber.
///
/// Level comes from `RUST_LOG`; when unset it is `info`, or `debug` when `debug` is true.
/// Load `.env` (e.g. `dotenvy::dotenv()`) before calling this or `RUST_LOG` from it is ignored.
/// When `log_file_path` is given, its parent directory is created and output goes to stdout and the file.
pub fn init_tracing(log_file_path: Option<&str>, debug: bool) -> anyhow::Result<()> {
    let writer = match log_file_path {
        Some(path) => {
            if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(io::stdout.and(Arc::new(file)))
        }
        None => BoxMakeWriter::new(io::stdout),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn test_init_tracing_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("relay.log");
        let path_str = path.to_str().unwrap().to_string();

        // A second global init in the same process may fail; the file is created either way.
        let _ = init_tracing(Some(&path_str), false);
        assert!(path.exists());
    }
}
