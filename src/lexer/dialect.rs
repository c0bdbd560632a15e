//! Грамматическая модель диалектов SQL
//!
//! Описывает ожидаемые последовательности ключевых слов для каждого вида
//! оператора в виде данных (дерево клауз), а не условной логики. Компилятор
//! грамматики (`Dialect::init`) обходит это дерево и строит плоскую таблицу
//! зарезервированных слов, которой пользуется сканер. Сам сканер о грамматике
//! ничего не знает: классификация слова определяется только таблицей.

use crate::common::{Error, Result};
use crate::lexer::token::TokenType;
use indexmap::IndexMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Таблица зарезервированных слов: каноническое написание → тип токена
pub type KeywordTable = IndexMap<&'static str, TokenType>;

/// Узел дерева ожидаемых токенов оператора
///
/// Непустой набор альтернативных типов токенов в данной позиции грамматики,
/// флаги необязательности/повторяемости и дочерние клаузы, применимые после
/// выбора одной из альтернатив.
#[derive(Debug, Clone)]
pub struct Clause {
    pub alternatives: Vec<TokenType>,
    pub optional: bool,
    pub repeatable: bool,
    pub children: Vec<Clause>,
}

impl Clause {
    /// Создает клаузу с набором альтернатив
    pub fn new(alternatives: Vec<TokenType>) -> Self {
        Self {
            alternatives,
            optional: false,
            repeatable: false,
            children: Vec::new(),
        }
    }

    /// Помечает клаузу как необязательную
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Помечает клаузу как повторяемую
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Добавляет дочерние клаузы
    pub fn with_children(mut self, children: Vec<Clause>) -> Self {
        self.children = children;
        self
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alternatives: Vec<String> = self
            .alternatives
            .iter()
            .map(|kind| kind.to_string())
            .collect();
        let joined = alternatives.join("|");

        let base = if self.alternatives.len() > 1 {
            format!("{{{}}}", joined)
        } else {
            joined
        };

        if self.optional {
            write!(f, "[{}]", base)?;
        } else {
            write!(f, "{}", base)?;
        }
        if self.repeatable {
            write!(f, "*")?;
        }

        for child in &self.children {
            write!(f, " {}", child)?;
        }

        Ok(())
    }
}

/// Грамматика одного вида оператора
///
/// Именованная последовательность клауз; альтернативы первой клаузы —
/// вводные ключевые слова оператора. Неизменяема после построения.
#[derive(Debug, Clone)]
pub struct Statement {
    pub name: String,
    pub clauses: Vec<Clause>,
}

impl Statement {
    pub fn new(name: impl Into<String>, clauses: Vec<Clause>) -> Self {
        Self {
            name: name.into(),
            clauses,
        }
    }

    /// Возвращает вводные типы токенов оператора
    pub fn introducers(&self) -> &[TokenType] {
        self.clauses
            .first()
            .map(|clause| clause.alternatives.as_slice())
            .unwrap_or(&[])
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for clause in &self.clauses {
            write!(f, " {}", clause)?;
        }
        Ok(())
    }
}

/// Диалект SQL: упорядоченный набор операторов и скомпилированная таблица
/// зарезервированных слов
///
/// Порядок операторов значим: при конфликте регистраций одного слова
/// побеждает более ранний оператор. Скомпилированная таблица публикуется
/// атомарной заменой `Arc` под блокировкой, поэтому читатели никогда не
/// видят частично построенную таблицу.
pub struct Dialect {
    pub name: String,
    pub statements: Vec<Statement>,
    table: RwLock<Option<Arc<KeywordTable>>>,
}

impl Dialect {
    pub fn new(name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Self {
            name: name.into(),
            statements,
            table: RwLock::new(None),
        }
    }

    /// Компилирует грамматику и публикует таблицу зарезервированных слов
    ///
    /// Идемпотентна: каждый вызов строит таблицу заново и дает тот же
    /// результат. Завершается ошибкой конфигурации только при некорректной
    /// грамматике (клауза с пустым набором альтернатив).
    pub fn init(&self) -> Result<()> {
        let table = self.compile()?;
        log::debug!(
            "compiled dialect '{}': {} statements, {} reserved words",
            self.name,
            self.statements.len(),
            table.len()
        );

        let mut published = self
            .table
            .write()
            .map_err(|_| Error::lock("dialect keyword table lock poisoned"))?;
        *published = Some(Arc::new(table));
        Ok(())
    }

    /// Возвращает опубликованную таблицу, при первом обращении компилируя ее
    pub fn keywords(&self) -> Result<Arc<KeywordTable>> {
        {
            let published = self
                .table
                .read()
                .map_err(|_| Error::lock("dialect keyword table lock poisoned"))?;
            if let Some(table) = published.as_ref() {
                return Ok(Arc::clone(table));
            }
        }

        self.init()?;

        let published = self
            .table
            .read()
            .map_err(|_| Error::lock("dialect keyword table lock poisoned"))?;
        published
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(|| Error::configuration(format!("dialect '{}' is not compiled", self.name)))
    }

    /// Строит таблицу зарезервированных слов обходом всех операторов
    fn compile(&self) -> Result<KeywordTable> {
        let mut table = KeywordTable::new();
        for statement in &self.statements {
            for clause in &statement.clauses {
                Self::register_clause(&statement.name, clause, &mut table)?;
            }
        }
        Ok(table)
    }

    /// Регистрирует ключевые слова одной клаузы и ее потомков
    ///
    /// Повторная регистрация уже занятого слова — no-op: побеждает более
    /// ранний оператор диалекта.
    fn register_clause(
        statement_name: &str,
        clause: &Clause,
        table: &mut KeywordTable,
    ) -> Result<()> {
        if clause.alternatives.is_empty() {
            return Err(Error::configuration(format!(
                "statement '{}' contains a clause with no alternatives",
                statement_name
            )));
        }

        for kind in &clause.alternatives {
            if let Some(word) = kind.keyword_text() {
                table.entry(word).or_insert(*kind);
            }
        }

        for child in &clause.children {
            Self::register_clause(statement_name, child, table)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialect")
            .field("name", &self.name)
            .field("statements", &self.statements.len())
            .finish()
    }
}
