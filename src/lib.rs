//! rustlex - Лексический анализатор SQL с поддержкой диалектов
//!
//! Преобразует текст SQL операторов в последовательность классифицированных
//! токенов. Классификация слова определяется не позицией в операторе, а
//! плоской таблицей зарезервированных слов, скомпилированной из декларативной
//! грамматики диалекта: одно и то же слово в разных диалектах может быть
//! ключевым словом или обычным идентификатором.

pub mod common;
pub mod lexer;

pub use common::error::{Error, Result};
pub use lexer::{Dialect, Position, Scanner, Token, TokenType};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
