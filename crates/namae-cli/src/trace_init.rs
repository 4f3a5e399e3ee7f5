use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "namae_core=info,namae_cli=info";
const DEFAULT_LOG_NAME: &str = "namaetool.log";

/// Install the global subscriber.
///
/// Logs go to stderr unless `log_file` is given. `RUST_LOG` overrides the
/// default filter. Keep the returned guard alive until exit so buffered file
/// output is flushed.
pub fn init_tracing(json: bool, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let (writer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .map(Path::new)
                .unwrap_or(Path::new(DEFAULT_LOG_NAME));
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .with_target(true)
        .with_env_filter(filter);

    let installed = if json {
        builder
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        eprintln!("Warning: tracing not initialized: {e}");
    }

    guard
}
