//! Генератор случайных уровней для новых узлов.

use rand::Rng;

use crate::config::SkipListConfig;

/// Геометрический генератор уровней.
///
/// Начиная с 1, уровень увеличивается, пока очередная равномерная выборка
/// из `[0, 1)` меньше `factor` и уровень не достиг `max_level`.
#[derive(Debug, Clone)]
pub struct LevelGenerator<R> {
    max_level: usize,
    factor: f64,
    rng: R,
}

impl<R: Rng> LevelGenerator<R> {
    /// Создаёт генератор по конфигурации.
    ///
    /// # Panics
    ///
    /// Паникует, если конфигурация некорректна: `max_level` вне
    /// `1..=LEVEL_LIMIT` или `factor` вне интервала `(0, 1)`.
    pub fn new(
        config: &SkipListConfig,
        rng: R,
    ) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid skip list configuration: {err}");
        }

        Self {
            max_level: config.max_level,
            factor: config.factor,
            rng,
        }
    }

    /// Генерирует уровень в диапазоне `1..=max_level`.
    #[inline]
    pub fn random_level(&mut self) -> usize {
        let mut level = 1;

        while level < self.max_level && self.rng.gen::<f64>() < self.factor {
            level += 1;
        }

        level
    }
}

impl<R> LevelGenerator<R> {
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}
