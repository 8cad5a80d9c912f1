use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("todo_api={}", level)
}

/// Initialize the logging system.
///
/// Human-readable logs go to stderr so stdout stays free for the server URL
/// and query output. With `log_file`, JSON logs are also written to a daily
/// rotated file; keep the returned guard alive until exit so they get flushed.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        let _ = subscriber.try_init();
        return None;
    };

    let (dir, file_name) = split_log_path(&log_path);
    let _ = std::fs::create_dir_all(dir);
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        dir, file_name,
    ));

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();
    let _ = subscriber.with(file_layer).try_init();
    Some(guard)
}

fn split_log_path(path: &Path) -> (&Path, &OsStr) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("todo-api.log"));
    (dir, file_name)
}
