use spanskip_error::{validate, ValidationError, ValidationResult};

use super::{
    node::{NodeId, Position},
    SkipList,
};
use crate::compare::{Comparator, NaturalOrder};

/// Статистика структуры SkipList.
#[derive(Debug, Clone, PartialEq)]
pub struct SkipListStatistics {
    /// Количество узлов
    pub node_count: usize,
    /// Распределение по уровням
    pub level_distribution: Vec<usize>,
    /// Текущий максимальный уровень
    pub current_max_level: usize,
    /// Максимально возможный уровень
    pub max_possible_level: usize,
    /// Средний уровень узла
    pub average_level: f64,
}

impl SkipListStatistics {
    /// Создает пустую статистику.
    pub fn empty(max_level: usize) -> Self {
        Self {
            node_count: 0,
            level_distribution: vec![0; max_level],
            current_max_level: 1,
            max_possible_level: max_level,
            average_level: 0.0,
        }
    }

    /// Вычисляет средний уровень.
    pub fn compute_average_level(&mut self) {
        if self.node_count == 0 {
            self.average_level = 0.0;
            return;
        }

        let total_levels: usize = self
            .level_distribution
            .iter()
            .enumerate()
            .map(|(level, &count)| (level + 1) * count)
            .sum();

        self.average_level = total_levels as f64 / self.node_count as f64;
    }

    /// Форматирует статистику для вывода.
    pub fn format_report(&self) -> String {
        let mut report = String::new();
        report.push_str("SkipList Statistics:\n");
        report.push_str(&format!("  Total nodes: {}\n", self.node_count));
        report.push_str(&format!(
            "  Current max level: {}\n",
            self.current_max_level
        ));
        report.push_str(&format!(
            "  Max possible level: {}\n",
            self.max_possible_level
        ));
        report.push_str(&format!("  Average level: {:.2}\n", self.average_level));
        report.push_str("  Level distribution:\n");

        for (level, &count) in self.level_distribution.iter().enumerate() {
            if count > 0 {
                let percentage = (count as f64 / self.node_count as f64) * 100.0;
                report.push_str(&format!(
                    "    Level {}: {} nodes ({:.1}%)\n",
                    level + 1,
                    count,
                    percentage
                ));
            }
        }

        report
    }
}

impl<T, R> SkipList<T, R> {
    /// Проверяет все структурные инварианты списка.
    ///
    /// Порядок уровня 0 проверяется компаратором (неубывание), span каждого
    /// ребра сверяется с рангами уровня 0, backward-ссылки и хвост сверяются
    /// с прямым обходом.
    pub fn validate_invariants_by<C>(
        &self,
        cmp: C,
    ) -> ValidationResult<()>
    where
        C: Comparator<T>,
    {
        let max_level = self.max_level();

        validate!(
            self.level >= 1 && self.level <= max_level,
            ValidationError::ActiveLevelOutOfRange {
                level: self.level,
                max_level
            }
        );

        // Ранги уровня 0; 0 означает «узел не встречен».
        let mut ranks = vec![0usize; self.arena.slot_count()];
        let mut prev: Option<NodeId> = None;
        let mut count = 0;
        let mut current = self.header.levels[0].forward;

        while let Some(id) = current {
            count += 1;

            validate!(
                count <= self.length,
                ValidationError::LengthMismatch {
                    expected: self.length,
                    actual: count
                }
            );

            let node = &self.arena[id];

            validate!(
                node.level() >= 1 && node.level() <= self.level,
                ValidationError::InvalidLevel {
                    node_level: node.level(),
                    max_level: self.level
                }
            );

            validate!(
                node.backward == prev,
                ValidationError::InvalidBackwardLink {
                    message: format!("node at rank {count} points to the wrong predecessor")
                }
            );

            if let Some(p) = prev {
                validate!(
                    !cmp.less(&node.value, &self.arena[p].value),
                    ValidationError::SortOrderViolation {
                        level: 0,
                        message: format!("node at rank {count} is less than its predecessor")
                    }
                );
            }

            ranks[id.index()] = count;
            prev = Some(id);
            current = node.levels[0].forward;
        }

        validate!(
            count == self.length,
            ValidationError::LengthMismatch {
                expected: self.length,
                actual: count
            }
        );

        validate!(
            self.tail == prev,
            ValidationError::TailMismatch {
                message: format!(
                    "tail is {:?}, last level-0 node is {:?}",
                    self.tail.map(|id| ranks.get(id.index()).copied().unwrap_or(0)),
                    prev.map(|id| ranks[id.index()])
                )
            }
        );

        for l in 0..self.level {
            let mut pos = Position::Head;
            let mut prev_rank = 0;
            let mut sum = 0;

            loop {
                let entry = self.entry(pos, l);

                match entry.forward {
                    Some(next) => {
                        let next_rank = ranks.get(next.index()).copied().unwrap_or(0);

                        validate!(
                            next_rank != 0,
                            ValidationError::MissingFromLowerLevel {
                                level: l,
                                rank: prev_rank
                            }
                        );
                        validate!(
                            next_rank > prev_rank,
                            ValidationError::SortOrderViolation {
                                level: l,
                                message: format!(
                                    "edge from rank {prev_rank} goes back to rank {next_rank}"
                                )
                            }
                        );
                        validate!(
                            entry.span == next_rank - prev_rank,
                            ValidationError::SpanMismatch {
                                level: l,
                                rank: prev_rank,
                                expected: next_rank - prev_rank,
                                actual: entry.span
                            }
                        );

                        sum += entry.span;
                        prev_rank = next_rank;
                        pos = Position::Node(next);
                    }
                    None => {
                        validate!(
                            entry.span == self.length - prev_rank,
                            ValidationError::SpanMismatch {
                                level: l,
                                rank: prev_rank,
                                expected: self.length - prev_rank,
                                actual: entry.span
                            }
                        );

                        sum += entry.span;
                        break;
                    }
                }
            }

            validate!(
                sum == self.length,
                ValidationError::SpanSumMismatch {
                    level: l,
                    expected: self.length,
                    actual: sum
                }
            );
        }

        validate!(
            self.level == 1 || self.header.levels[self.level - 1].forward.is_some(),
            ValidationError::EmptyTopLevel { level: self.level }
        );

        Ok(())
    }

    /// Собирает статистику распределения узлов по уровням.
    pub fn statistics(&self) -> SkipListStatistics {
        let mut stats = SkipListStatistics::empty(self.max_level());
        let mut current = self.header.levels[0].forward;

        while let Some(id) = current {
            let node = &self.arena[id];
            stats.level_distribution[node.level() - 1] += 1;
            stats.node_count += 1;
            current = node.levels[0].forward;
        }

        stats.current_max_level = self.level;
        stats.compute_average_level();
        stats
    }
}

impl<T: Ord, R> SkipList<T, R> {
    /// Проверяет инварианты в естественном порядке `Ord`.
    pub fn validate_invariants(&self) -> ValidationResult<()> {
        self.validate_invariants_by(NaturalOrder)
    }
}
