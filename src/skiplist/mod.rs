//! SkipList с рангами для spanskip.
//!
//! # Модули
//!
//! - `skiplist_base`: структура списка, вставка, поиск и удаление.
//! - `node`: арена узлов и ссылки на узлы.
//! - `level`: генератор случайных уровней.
//! - `iter`: прямой и обратный обход.
//! - `safety`: валидация инвариантов и статистика.
//! - `dump`: диагностический вывод по уровням.

pub mod dump;
pub mod iter;
pub mod level;
pub mod node;
pub mod safety;
pub mod skiplist_base;

pub use iter::*;
pub use level::*;
pub use node::NodeRef;
pub use safety::*;
pub use skiplist_base::*;

/// Максимальный уровень пропускного списка по умолчанию.
pub const MAX_LEVEL: usize = 32;

/// Вероятностный коэффициент для определения уровня нового узла.
pub const FACTOR: f64 = 0.5;

/// Предельно допустимое значение `max_level` в конфигурации.
pub const LEVEL_LIMIT: usize = 64;
