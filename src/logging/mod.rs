//! Логирование на базе `tracing-subscriber`.
//!
//! Библиотека сама только эмитит события `tracing`; установка подписчика
//! остаётся на вызывающей стороне через [`init_logging`].

pub mod config;
mod filters;
mod formatter;

pub use config::{LogFormat, LoggingConfig};
pub use filters::build_filter_from_config;
pub use formatter::build_formatter;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Устанавливает глобальный подписчик: фильтр + fmt-слой в stdout.
pub fn init_logging(mut config: LoggingConfig) -> Result<(), LoggingError> {
    config.apply_env_overrides();

    let env_filter = build_filter_from_config(&config);

    tracing_subscriber::registry()
        .with(build_formatter(&config, std::io::stdout))
        .with(env_filter)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        format = ?config.format,
        "Logging system initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rand::{rngs::StdRng, SeedableRng};
    use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

    use super::*;
    use crate::SkipList;

    // Мини-буферный writer для тестов
    #[derive(Clone)]
    struct VecMakeWriter(Arc<Mutex<Vec<u8>>>);

    struct VecWriterGuard(Arc<Mutex<Vec<u8>>>);

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for VecMakeWriter {
        type Writer = VecWriterGuard;

        fn make_writer(&'a self) -> Self::Writer {
            VecWriterGuard(self.0.clone())
        }
    }

    impl std::io::Write for VecWriterGuard {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(
        format: LogFormat,
        body: impl FnOnce(),
    ) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let config = LoggingConfig {
            level: "trace".to_string(),
            format,
            with_ansi: false,
            with_target: true,
        };

        let subscriber = Registry::default()
            .with(build_formatter(&config, VecMakeWriter(buffer.clone())))
            .with(EnvFilter::new(config.build_filter_directive()));

        tracing::subscriber::with_default(subscriber, body);

        let out = buffer.lock().unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Тест проверяет, что рост уровня списка попадает в лог.
    #[test]
    fn test_level_growth_is_traced() {
        let out = capture(LogFormat::Compact, || {
            let mut sl = SkipList::with_rng(StdRng::seed_from_u64(11));
            for i in 0..64 {
                sl.put(i);
            }
        });

        assert!(out.contains("skip list level grew"), "output: {out}");
    }

    /// Тест проверяет, что очистка пишет debug-событие в JSON-формате.
    #[test]
    fn test_clear_is_logged_as_json() {
        let out = capture(LogFormat::Json, || {
            let mut sl = SkipList::with_rng(StdRng::seed_from_u64(12));
            sl.put(1);
            sl.clear();
        });

        assert!(out.contains("clearing skip list"), "output: {out}");
        assert!(out.contains("\"length\":1"), "output: {out}");
    }

    #[test]
    fn test_pretty_format_builds() {
        let out = capture(LogFormat::Pretty, || tracing::info!("pretty message"));

        assert!(out.contains("pretty message"));
    }
}
