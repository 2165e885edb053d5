pub mod config;
pub mod validation;

// Публичный экспорт всех типов ошибок из вложенных модулей.
pub use config::*;
pub use validation::*;
