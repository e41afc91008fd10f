use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Send logs to `log_file` through a background writer.
///
/// The terminal is taken over by the visualizer, so nothing is logged without a file.
/// The returned guard flushes pending lines when dropped and must be kept alive until exit.
pub fn init_file_logging(log_file: Option<&Path>, debug: bool) -> Option<WorkerGuard> {
    let path = log_file?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name()?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level(debug))
        .init();
    Some(guard)
}

/// Log to stdout, for headless runs.
pub fn init_stdout_logging(debug: bool) {
    tracing_subscriber::fmt().with_max_level(level(debug)).init();
}

fn level(debug: bool) -> Level {
    if debug { Level::DEBUG } else { Level::INFO }
}
