use tracing_subscriber::{fmt, layer::Layer, registry::LookupSpan};

use crate::logging::config::{LogFormat, LoggingConfig};

/// Fmt-слой с выбранным форматом; тип формата стирается через `Box`.
pub fn build_formatter<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target);

    match config.format {
        LogFormat::Compact => Box::new(layer.compact()),
        LogFormat::Pretty => Box::new(layer.pretty()),
        LogFormat::Json => Box::new(layer.json()),
    }
}
