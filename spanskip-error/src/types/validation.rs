use thiserror::Error;

/// Нарушения инвариантов пропускного списка, обнаруженные при валидации.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Уровень узла превышает максимальный
    #[error("Node level {node_level} exceeds maximum level {max_level}")]
    InvalidLevel { node_level: usize, max_level: usize },
    /// Активный уровень списка вне диапазона 1..=max_level
    #[error("Active level {level} out of range 1..={max_level}")]
    ActiveLevelOutOfRange { level: usize, max_level: usize },
    /// Верхний активный уровень не содержит ни одного узла
    #[error("Top level {level} is empty")]
    EmptyTopLevel { level: usize },
    /// Нарушен порядок сортировки
    #[error("Sort order violation at level {level}: {message}")]
    SortOrderViolation { level: usize, message: String },
    /// Длина списка не соответствует реальному кол-ву узлов
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// Span ребра не совпадает с числом шагов на уровне 0
    #[error("Span mismatch at level {level}, rank {rank}: expected {expected}, got {actual}")]
    SpanMismatch {
        level: usize,
        rank: usize,
        expected: usize,
        actual: usize,
    },
    /// Сумма span'ов уровня не равна длине списка
    #[error("Span sum at level {level} is {actual}, expected {expected}")]
    SpanSumMismatch {
        level: usize,
        expected: usize,
        actual: usize,
    },
    /// Узел верхнего уровня отсутствует на нижнем уровне
    #[error("Node at rank {rank} present on level {level} but missing below")]
    MissingFromLowerLevel { level: usize, rank: usize },
    /// Backward-ссылка указывает на неверный узел
    #[error("Invalid backward link: {message}")]
    InvalidBackwardLink { message: String },
    /// Хвост не совпадает с последним узлом уровня 0
    #[error("Tail mismatch: {message}")]
    TailMismatch { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidLevel {
            node_level: 40,
            max_level: 32,
        };
        assert!(err.to_string().contains("exceeds maximum level"));
    }

    #[test]
    fn test_span_mismatch_display() {
        let err = ValidationError::SpanMismatch {
            level: 2,
            rank: 5,
            expected: 3,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Span mismatch at level 2, rank 5: expected 3, got 4"
        );
    }

    #[test]
    fn test_validation_error_display_via_dyn_error() {
        let err = ValidationError::EmptyTopLevel { level: 3 };
        let err_ref: &dyn std::error::Error = &err;
        assert_eq!(err_ref.to_string(), err.to_string());
        assert_eq!(err_ref.to_string(), "Top level 3 is empty");
        assert!(err_ref.source().is_none());
    }
}
