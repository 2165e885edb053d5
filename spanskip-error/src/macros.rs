/// Проверяет условие и немедленно возвращает ошибку, если оно ложно.
///
/// ```ignore
/// use spanskip_error::{validate, ValidationError};
///
/// fn check(len: usize, count: usize) -> Result<(), ValidationError> {
///     validate!(
///         len == count,
///         ValidationError::LengthMismatch { expected: len, actual: count }
///     );
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! validate {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

/// Проверяет параметр конфигурации; при нарушении возвращает
/// `Err(ConfigError)`. Ошибка приводится через `From`.
///
/// ```ignore
/// use spanskip_error::{ensure_config, ConfigError};
///
/// fn check(factor: f64) -> Result<(), ConfigError> {
///     ensure_config!(factor > 0.0, ConfigError::InvalidFactor { factor });
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure_config {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($crate::ConfigError::from($err));
        }
    };
}

/// Макрос для debug-time проверки инвариантов.
///
/// В release-сборках компилируется в no-op.
#[macro_export]
macro_rules! debug_assert_invariant {
    ($cond:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            if !$cond {
                panic!("Invariant violation: {}", format!($($arg)*));
            }
        }
    };
}
