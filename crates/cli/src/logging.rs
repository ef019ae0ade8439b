//! Logging setup
//!
//! `HHN_LOG_FORMAT=json` switches to JSON lines; `RUST_LOG` overrides the
//! configured filter. Events go to stderr so stdout stays clean for
//! container logs and `--json` output.

use crate::settings::LoggingSettings;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "hhn.log";

/// Initialize the global subscriber.
///
/// The returned guard flushes the file writer and must live until exit.
pub fn init(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let log_format =
        std::env::var("HHN_LOG_FORMAT").unwrap_or_else(|_| settings.format.clone());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))?;

    let (file_writer, guard) = match settings.log_dir() {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(file_writer.map(|w| fmt::layer().json().with_writer(w)))
                .try_init()?;
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .with(file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
                .try_init()?;
        }
    }

    Ok(guard)
}
