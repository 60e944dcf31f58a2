//! Logging setup for taskwin: file output plus optional stdout.
//!
//! Logs always go to a file (default `warn` level). Stdout logging turns on
//! when `TASKWIN_LOG` or `RUST_LOG` is set, or in debug builds.
//!
//! Environment variables, highest priority first:
//!
//! 1. `TASKWIN_LOG` -- bare levels are expanded to the taskwin crates
//!    (`TASKWIN_LOG=debug` means `warn,taskwin=debug,...`); anything with
//!    filter syntax is passed through untouched
//! 2. `RUST_LOG` -- standard tracing filter, used as-is
//! 3. default -- `warn` globally, `info` for taskwin crates
//!
//! The default log file is `<data_local_dir>/taskwin/logs/taskwin-<pid>.log`,
//! overridable per call with [`LogConfig::log_file_path`].

use std::{env, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const TASKWIN_CRATES: &[&str] = &["taskwin", "taskwin_bin", "taskwin_log"];

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Default)]
pub struct LogConfig {
    /// Log file or directory override. A path with an extension is taken as
    /// the file itself; otherwise it is the directory to write into.
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program --
/// dropping it flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter());

    let stdout_enabled =
        env::var("TASKWIN_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);

    let stdout_layer = stdout_enabled.then(|| fmt::layer().with_filter(stdout_filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Initialize stdout-only logging for tests.
///
/// Safe to call from every test; repeated initialization is ignored.
pub fn test() {
    let _ = fmt().with_env_filter(stdout_filter()).try_init();
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("taskwin-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir, name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskwin")
        .join("logs");

    (dir, filename)
}

/// File filter: user-specified level if set, otherwise `warn`.
fn file_filter() -> EnvFilter {
    if env::var("TASKWIN_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        stdout_filter()
    } else {
        EnvFilter::new("warn")
    }
}

/// Build the filter from `TASKWIN_LOG` > `RUST_LOG` > defaults.
fn stdout_filter() -> EnvFilter {
    if let Ok(taskwin_log) = env::var("TASKWIN_LOG") {
        return expand_taskwin_log(&taskwin_log);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new(default_filter("info"))
}

/// Expand a bare `TASKWIN_LOG` level into per-crate directives.
///
/// Values containing filter syntax (`=`, `:`, `,`) are used as-is so advanced
/// forms like `TASKWIN_LOG=taskwin=trace,taskwin_bin=debug` still work.
fn expand_taskwin_log(taskwin_log: &str) -> EnvFilter {
    if taskwin_log.contains('=') || taskwin_log.contains(':') || taskwin_log.contains(',') {
        return EnvFilter::new(taskwin_log);
    }

    EnvFilter::new(default_filter(taskwin_log))
}

fn default_filter(level: &str) -> String {
    let mut filter = String::from("warn");
    for krate in TASKWIN_CRATES {
        filter.push_str(&format!(",{krate}={level}"));
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_all_crates() {
        let filter = default_filter("debug");
        assert!(filter.starts_with("warn"));
        for krate in TASKWIN_CRATES {
            assert!(filter.contains(&format!("{krate}=debug")));
        }
    }

    #[test]
    fn file_path_override_with_extension_is_the_file() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/logs/out.log")));
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, "out.log");
    }

    #[test]
    fn directory_override_keeps_default_filename() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/logs")));
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert!(name.starts_with("taskwin-"));
        assert!(name.ends_with(".log"));
    }
}
