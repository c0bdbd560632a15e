//! Токены для SQL лексера rustlex
//!
//! Определяет все типы токенов, которые может распознать лексический анализатор:
//! зарегистрированные ключевые слова диалекта, имена типов, пунктуацию
//! и обобщенные токены (идентификаторы, значения, числа).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Токен с позицией и значением
///
/// Для ключевых слов `value` хранит лексему в исходном написании
/// (`"DESCRIBE"`, `"int"`), для обобщенных токенов — полезную нагрузку
/// без кавычек-ограничителей. После эмиссии токен не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, value: String, position: Position) -> Self {
        Self {
            token_type,
            value,
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}') at {}", self.token_type, self.value, self.position)
    }
}

/// Типы токенов SQL
///
/// Ключевые слова попадают в эту перечисление только если какой-то диалект
/// ссылается на них в своей грамматике; слово без регистрации всегда
/// сканируется как `Identity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    // === Вводные ключевые слова операторов ===
    Describe,
    Desc,
    Show,
    Create,
    Drop,
    Select,
    Insert,
    Update,
    Delete,

    // === Ключевые слова клауз ===
    Into,
    Values,
    Set,
    From,
    Where,
    Like,
    Full,
    Tables,
    Schema,
    Database,
    Source,
    Table,
    View,
    If,
    Exists,
    Negate,
    Null,
    Default,
    Primary,
    Key,
    Constraint,
    Foreign,
    References,
    Engine,
    With,
    And,
    Or,
    Order,
    By,
    Ascending,
    Descending,

    // === Имена типов ===
    TypeInteger,
    TypeChar,
    TypeVarchar,
    TypeText,

    // === Пунктуация и операторы ===
    Equal,            // =
    Comma,            // ,
    Star,             // *
    LeftParenthesis,  // (
    RightParenthesis, // )

    // === Обобщенные токены ===
    /// Идентификатор (имя схемы, таблицы, колонки; без кавычек или в `...`)
    Identity,

    /// Значение в кавычках ('...' или "...")
    Value,

    /// Целое число
    Integer,

    /// Конец входного текста
    Eof,

    /// Лексическая ошибка (терминальный элемент ленивой последовательности)
    Error,
}

impl TokenType {
    /// Возвращает каноническое написание ключевого слова
    ///
    /// Именно это написание регистрируется в таблице зарезервированных слов
    /// и используется для поиска после приведения слова к верхнему регистру.
    /// Для пунктуации и обобщенных токенов возвращает `None`.
    pub fn keyword_text(&self) -> Option<&'static str> {
        match self {
            TokenType::Describe => Some("DESCRIBE"),
            TokenType::Desc => Some("DESC"),
            TokenType::Show => Some("SHOW"),
            TokenType::Create => Some("CREATE"),
            TokenType::Drop => Some("DROP"),
            TokenType::Select => Some("SELECT"),
            TokenType::Insert => Some("INSERT"),
            TokenType::Update => Some("UPDATE"),
            TokenType::Delete => Some("DELETE"),
            TokenType::Into => Some("INTO"),
            TokenType::Values => Some("VALUES"),
            TokenType::Set => Some("SET"),
            TokenType::From => Some("FROM"),
            TokenType::Where => Some("WHERE"),
            TokenType::Like => Some("LIKE"),
            TokenType::Full => Some("FULL"),
            TokenType::Tables => Some("TABLES"),
            TokenType::Schema => Some("SCHEMA"),
            TokenType::Database => Some("DATABASE"),
            TokenType::Source => Some("SOURCE"),
            TokenType::Table => Some("TABLE"),
            TokenType::View => Some("VIEW"),
            TokenType::If => Some("IF"),
            TokenType::Exists => Some("EXISTS"),
            TokenType::Negate => Some("NOT"),
            TokenType::Null => Some("NULL"),
            TokenType::Default => Some("DEFAULT"),
            TokenType::Primary => Some("PRIMARY"),
            TokenType::Key => Some("KEY"),
            TokenType::Constraint => Some("CONSTRAINT"),
            TokenType::Foreign => Some("FOREIGN"),
            TokenType::References => Some("REFERENCES"),
            TokenType::Engine => Some("ENGINE"),
            TokenType::With => Some("WITH"),
            TokenType::And => Some("AND"),
            TokenType::Or => Some("OR"),
            TokenType::Order => Some("ORDER"),
            TokenType::By => Some("BY"),
            TokenType::Ascending => Some("ASC"),
            TokenType::Descending => Some("DESC"),
            TokenType::TypeInteger => Some("INT"),
            TokenType::TypeChar => Some("CHAR"),
            TokenType::TypeVarchar => Some("VARCHAR"),
            TokenType::TypeText => Some("TEXT"),
            _ => None,
        }
    }

    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        self.keyword_text().is_some()
    }

    /// Проверяет, является ли токен именем типа
    pub fn is_type_name(&self) -> bool {
        matches!(
            self,
            TokenType::TypeInteger
                | TokenType::TypeChar
                | TokenType::TypeVarchar
                | TokenType::TypeText
        )
    }

    /// Проверяет, является ли токен обобщенным (несет произвольную нагрузку)
    pub fn is_generic(&self) -> bool {
        matches!(
            self,
            TokenType::Identity
                | TokenType::Value
                | TokenType::Integer
                | TokenType::Eof
                | TokenType::Error
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Equal => "=",
            TokenType::Comma => ",",
            TokenType::Star => "*",
            TokenType::LeftParenthesis => "(",
            TokenType::RightParenthesis => ")",
            TokenType::Identity => "<identity>",
            TokenType::Value => "<value>",
            TokenType::Integer => "<integer>",
            TokenType::Eof => "<eof>",
            TokenType::Error => "<error>",
            other => other.keyword_text().unwrap_or("<unknown>"),
        };
        write!(f, "{}", name)
    }
}
