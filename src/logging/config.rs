use std::str::FromStr;

/// Формат вывода логов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Уровень по умолчанию для crate (`trace`, `debug`, `info`, ...)
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl LoggingConfig {
    /// Директива для `EnvFilter`, например `spanskip=debug`.
    pub fn build_filter_directive(&self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.level)
    }

    /// Переопределения из окружения: `SPANSKIP_LOG_LEVEL`,
    /// `SPANSKIP_LOG_FORMAT`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("SPANSKIP_LOG_LEVEL") {
            self.level = level;
        }

        if let Some(format) = std::env::var("SPANSKIP_LOG_FORMAT")
            .ok()
            .and_then(|f| f.parse().ok())
        {
            self.format = format;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            with_ansi: true,
            with_target: true,
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}
