use thiserror::Error;

/// Ошибки конфигурации пропускного списка.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Максимальный уровень вне допустимого диапазона
    #[error("max_level must be in 1..={limit}, got {max_level}")]
    InvalidMaxLevel { max_level: usize, limit: usize },
    /// Вероятностный коэффициент вне интервала (0, 1)
    #[error("factor must be in the open interval (0, 1), got {factor}")]
    InvalidFactor { factor: f64 },
    /// Ошибка загрузки источника конфигурации
    #[error("failed to load configuration: {0}")]
    Source(String),
}
