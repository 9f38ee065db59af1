//! Logging initialization: optional rolling file log plus stderr output,
//! driven by [`LoggingConfig`].

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Holds the non-blocking writer guards. Dropping it flushes and stops log
/// writes, so it has to live until program exit.
#[must_use = "dropping this guard stops logging - keep it alive for the program's lifetime"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
    _stderr_guard: Option<WorkerGuard>,
}

/// Initialize the logging subsystem and return its guard.
pub fn init_logging(config: &LoggingConfig, project_root: &Path) -> Result<LoggingGuard> {
    let mut file_guard = None;
    let mut stderr_guard = None;

    let file_layer = if config.enabled {
        let log_dir = resolve_log_dir(&config.directory, project_root);
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let appender = RollingFileAppender::new(
            parse_rotation(&config.rotation),
            &log_dir,
            &config.file_prefix,
        );
        let (writer, guard) = tracing_appender::non_blocking(appender);
        file_guard = Some(guard);

        Some(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(parse_level(&config.level)),
        )
    } else {
        None
    };

    let stderr_layer = if config.stderr {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
        stderr_guard = Some(guard);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sciprag=info"));
        Some(
            fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_filter(filter),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to initialize logging subscriber")?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
        _stderr_guard: stderr_guard,
    })
}

/// Fallback initialization for errors that happen before the config loads.
pub fn init_early_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sciprag=info")),
        )
        .with(fmt::layer().with_target(false))
        .try_init();
}

fn resolve_log_dir(directory: &Path, project_root: &Path) -> PathBuf {
    if directory.is_absolute() {
        directory.to_path_buf()
    } else {
        project_root.join(directory)
    }
}

fn parse_level(level: &str) -> EnvFilter {
    let directive = match level.to_lowercase().as_str() {
        "trace" => "sciprag=trace",
        "debug" => "sciprag=debug",
        "info" => "sciprag=info",
        "warn" => "sciprag=warn",
        "error" => "sciprag=error",
        other => {
            eprintln!("Warning: unknown log level '{other}', defaulting to 'info'");
            "sciprag=info"
        }
    };
    EnvFilter::new(directive)
}

fn parse_rotation(rotation: &str) -> Rotation {
    match rotation.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        "minutely" => Rotation::MINUTELY,
        "never" => Rotation::NEVER,
        other => {
            eprintln!("Warning: unknown rotation strategy '{other}', defaulting to 'daily'");
            Rotation::DAILY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert!(parse_level("debug").to_string().contains("debug"));
        assert!(parse_level("TRACE").to_string().contains("trace"));
        // unknown levels fall back to info
        assert!(parse_level("loud").to_string().contains("info"));
    }

    #[test]
    fn test_parse_rotation_accepts_all_strategies() {
        // Rotation has no PartialEq; just verify no panic
        for strategy in ["hourly", "daily", "minutely", "never", "bogus"] {
            let _ = parse_rotation(strategy);
        }
    }

    #[test]
    fn test_resolve_log_dir() {
        let root = Path::new("/home/user/project");
        assert_eq!(
            resolve_log_dir(Path::new(".sciprag/logs"), root),
            Path::new("/home/user/project/.sciprag/logs")
        );
        assert_eq!(
            resolve_log_dir(Path::new("/var/log/sciprag"), root),
            Path::new("/var/log/sciprag")
        );
    }
}
