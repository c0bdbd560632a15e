//! Обработка ошибок для RustLex

use thiserror::Error;

/// Основной тип ошибки для RustLex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка конфигурации грамматики или реестра диалектов
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Лексическая ошибка во входном тексте
    #[error("Lexical error at offset {offset}: {message}")]
    Lexical { message: String, offset: usize },

    /// Ошибка блокировки общего состояния
    #[error("Lock error: {message}")]
    Lock { message: String },
}

/// Тип результата для RustLex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает лексическую ошибку с позицией во входном тексте
    pub fn lexical(message: impl Into<String>, offset: usize) -> Self {
        Self::Lexical {
            message: message.into(),
            offset,
        }
    }

    /// Создает ошибку блокировки
    pub fn lock(message: impl Into<String>) -> Self {
        Self::Lock {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::configuration("empty clause");
        assert_eq!(err.to_string(), "Configuration error: empty clause");

        let err = Error::lexical("unexpected character '@'", 7);
        assert_eq!(
            err.to_string(),
            "Lexical error at offset 7: unexpected character '@'"
        );

        let err = Error::lock("dialect registry lock poisoned");
        assert_eq!(err.to_string(), "Lock error: dialect registry lock poisoned");
    }
}
