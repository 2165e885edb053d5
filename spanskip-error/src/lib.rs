pub mod macros;
pub mod types;

// Publicly re-export all error types and macros from the submodules to
// simplify access from external code.
pub use macros::*;
pub use types::*;

/// Результат структурной проверки списка.
pub type ValidationResult<T> = Result<T, ValidationError>;
