//! Параметры пропускного списка и их загрузка из окружения.

use config::{Config, Environment};
use serde::Deserialize;
use spanskip_error::{ensure_config, ConfigError};

use crate::skiplist::{FACTOR, LEVEL_LIMIT, MAX_LEVEL};

/// Префикс переменных окружения (`SPANSKIP_MAX_LEVEL`, `SPANSKIP_FACTOR`).
pub const ENV_PREFIX: &str = "SPANSKIP";

/// Параметры структуры списка.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SkipListConfig {
    /// Ёмкость массива уровней головы и верхняя граница уровня узла.
    pub max_level: usize,
    /// Вероятность повышения уровня нового узла.
    pub factor: f64,
}

impl SkipListConfig {
    /// Загружает конфигурацию: значения по умолчанию, затем переменные
    /// окружения с префиксом `SPANSKIP`.
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .set_default("max_level", MAX_LEVEL as i64)
            .map_err(source)?
            .set_default("factor", FACTOR)
            .map_err(source)?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(source)?;

        let settings: Self = cfg.try_deserialize().map_err(source)?;
        settings.validate()?;

        tracing::debug!(
            max_level = settings.max_level,
            factor = settings.factor,
            "skip list configuration loaded"
        );

        Ok(settings)
    }

    /// Проверяет границы параметров.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_config!(
            (1..=LEVEL_LIMIT).contains(&self.max_level),
            ConfigError::InvalidMaxLevel {
                max_level: self.max_level,
                limit: LEVEL_LIMIT,
            }
        );
        ensure_config!(
            self.factor > 0.0 && self.factor < 1.0,
            ConfigError::InvalidFactor {
                factor: self.factor,
            }
        );

        Ok(())
    }
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            factor: FACTOR,
        }
    }
}

fn source(err: config::ConfigError) -> ConfigError {
    ConfigError::Source(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = SkipListConfig::default();

        assert_eq!(cfg.max_level, 32);
        assert_eq!(cfg.factor, 0.5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_max_level_rejected() {
        let cfg = SkipListConfig {
            max_level: 0,
            factor: 0.5,
        };

        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidMaxLevel { max_level: 0, .. })
        ));
    }

    #[test]
    fn test_max_level_above_limit_rejected() {
        let cfg = SkipListConfig {
            max_level: LEVEL_LIMIT + 1,
            factor: 0.5,
        };

        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_factor_bounds() {
        for factor in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let cfg = SkipListConfig {
                max_level: 16,
                factor,
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidFactor { .. })),
                "factor {factor} accepted"
            );
        }
    }
}
