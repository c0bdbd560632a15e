//! Встроенный SQL диалект
//!
//! Базовая грамматика (DESCRIBE, SHOW, CREATE, DROP, SELECT, INSERT, UPDATE,
//! DELETE) с расширениями `SOURCE`, `SCHEMA ... WITH` и опциями хранения.
//! Слова, на которые грамматика не ссылается (`TRIGGER`, `TRIGGERS`, `INDEX`,
//! `CHARSET`, `AUTO_INCREMENT`), сканируются как `Identity`.

use crate::lexer::dialect::{Clause, Dialect, Statement};
use crate::lexer::token::TokenType;

/// Имя встроенного SQL диалекта в реестре
pub const SQL_DIALECT: &str = "sql";

/// Строит встроенный SQL диалект
///
/// Порядок операторов значим: DESCRIBE регистрирует `DESC` раньше, чем
/// SELECT успевает сослаться на направление сортировки `Descending`,
/// поэтому одиночное `DESC` всегда сканируется как `Desc`.
pub fn sql_dialect() -> Dialect {
    Dialect::new(
        SQL_DIALECT,
        vec![
            describe_statement(),
            show_statement(),
            create_statement(),
            drop_statement(),
            select_statement(),
            insert_statement(),
            update_statement(),
            delete_statement(),
        ],
    )
}

fn describe_statement() -> Statement {
    Statement::new(
        "DESCRIBE",
        vec![
            Clause::new(vec![TokenType::Describe, TokenType::Desc]),
            Clause::new(vec![TokenType::Identity]),
        ],
    )
}

fn show_statement() -> Statement {
    Statement::new(
        "SHOW",
        vec![
            Clause::new(vec![TokenType::Show]),
            Clause::new(vec![TokenType::Full]).optional(),
            Clause::new(vec![TokenType::Tables]).optional(),
            Clause::new(vec![TokenType::From])
                .optional()
                .with_children(vec![Clause::new(vec![TokenType::Identity])]),
            Clause::new(vec![TokenType::Identity]).optional(),
            Clause::new(vec![TokenType::Like])
                .optional()
                .with_children(vec![Clause::new(vec![TokenType::Value])]),
            Clause::new(vec![TokenType::Where])
                .optional()
                .with_children(vec![filter_expression()]),
        ],
    )
}

fn create_statement() -> Statement {
    Statement::new(
        "CREATE",
        vec![
            Clause::new(vec![TokenType::Create]),
            Clause::new(vec![
                TokenType::Schema,
                TokenType::Database,
                TokenType::Source,
                TokenType::Table,
                TokenType::View,
            ]),
            Clause::new(vec![TokenType::If])
                .optional()
                .with_children(vec![
                    Clause::new(vec![TokenType::Negate]),
                    Clause::new(vec![TokenType::Exists]),
                ]),
            Clause::new(vec![TokenType::Identity]),
            column_definitions(),
            table_options(),
            with_properties(),
        ],
    )
}

/// Определения колонок: `(name type(size) [NOT NULL] [DEFAULT <value>] ...)`
fn column_definitions() -> Clause {
    Clause::new(vec![TokenType::LeftParenthesis])
        .optional()
        .with_children(vec![
            Clause::new(vec![TokenType::Identity]).repeatable(),
            Clause::new(vec![
                TokenType::TypeInteger,
                TokenType::TypeChar,
                TokenType::TypeVarchar,
                TokenType::TypeText,
            ])
            .optional()
            .repeatable(),
            Clause::new(vec![TokenType::Negate])
                .optional()
                .with_children(vec![Clause::new(vec![TokenType::Null])]),
            Clause::new(vec![TokenType::Default])
                .optional()
                .with_children(vec![Clause::new(vec![TokenType::Value])]),
            Clause::new(vec![TokenType::Primary, TokenType::Foreign])
                .optional()
                .with_children(vec![Clause::new(vec![TokenType::Key])]),
            Clause::new(vec![TokenType::Constraint])
                .optional()
                .with_children(vec![
                    Clause::new(vec![TokenType::Identity]),
                    Clause::new(vec![TokenType::References]),
                ]),
            Clause::new(vec![TokenType::RightParenthesis]),
        ])
}

/// Опции таблицы: `ENGINE=InnoDB DEFAULT CHARSET=utf8` и подобные
///
/// Значения опций — обобщенные токены, поэтому `InnoDB`, `CHARSET` и `utf8`
/// остаются идентификаторами.
fn table_options() -> Clause {
    Clause::new(vec![TokenType::Engine, TokenType::Default])
        .optional()
        .repeatable()
        .with_children(vec![
            Clause::new(vec![TokenType::Equal]).optional(),
            Clause::new(vec![
                TokenType::Identity,
                TokenType::Value,
                TokenType::Integer,
            ])
            .optional(),
        ])
}

/// Свойства расширения: `WITH key = "value" ...`
fn with_properties() -> Clause {
    Clause::new(vec![TokenType::With])
        .optional()
        .with_children(vec![Clause::new(vec![TokenType::Identity])
            .repeatable()
            .with_children(vec![
                Clause::new(vec![TokenType::Equal]),
                Clause::new(vec![
                    TokenType::Value,
                    TokenType::Integer,
                    TokenType::Identity,
                ]),
            ])])
}

fn drop_statement() -> Statement {
    Statement::new(
        "DROP",
        vec![
            Clause::new(vec![TokenType::Drop]),
            Clause::new(vec![
                TokenType::Schema,
                TokenType::Database,
                TokenType::Source,
                TokenType::Table,
                TokenType::View,
            ]),
            Clause::new(vec![TokenType::If])
                .optional()
                .with_children(vec![Clause::new(vec![TokenType::Exists])]),
            Clause::new(vec![TokenType::Identity]),
        ],
    )
}

fn select_statement() -> Statement {
    Statement::new(
        "SELECT",
        vec![
            Clause::new(vec![TokenType::Select]),
            Clause::new(vec![TokenType::Star, TokenType::Identity]).repeatable(),
            Clause::new(vec![TokenType::From])
                .with_children(vec![Clause::new(vec![TokenType::Identity])]),
            Clause::new(vec![TokenType::Where])
                .optional()
                .with_children(vec![filter_expression()]),
            Clause::new(vec![TokenType::Order])
                .optional()
                .with_children(vec![
                    Clause::new(vec![TokenType::By]),
                    Clause::new(vec![TokenType::Identity]),
                    Clause::new(vec![TokenType::Ascending, TokenType::Descending]).optional(),
                ]),
        ],
    )
}

fn insert_statement() -> Statement {
    Statement::new(
        "INSERT",
        vec![
            Clause::new(vec![TokenType::Insert]),
            Clause::new(vec![TokenType::Into])
                .with_children(vec![Clause::new(vec![TokenType::Identity])]),
            Clause::new(vec![TokenType::Values]).with_children(vec![Clause::new(vec![
                TokenType::Value,
                TokenType::Integer,
                TokenType::Identity,
            ])
            .repeatable()]),
        ],
    )
}

fn update_statement() -> Statement {
    Statement::new(
        "UPDATE",
        vec![
            Clause::new(vec![TokenType::Update]),
            Clause::new(vec![TokenType::Identity]),
            Clause::new(vec![TokenType::Set]).with_children(vec![Clause::new(vec![
                TokenType::Identity,
            ])
            .repeatable()
            .with_children(vec![
                Clause::new(vec![TokenType::Equal]),
                Clause::new(vec![
                    TokenType::Value,
                    TokenType::Integer,
                    TokenType::Identity,
                ]),
            ])]),
            Clause::new(vec![TokenType::Where])
                .optional()
                .with_children(vec![filter_expression()]),
        ],
    )
}

fn delete_statement() -> Statement {
    Statement::new(
        "DELETE",
        vec![
            Clause::new(vec![TokenType::Delete]),
            Clause::new(vec![TokenType::From])
                .with_children(vec![Clause::new(vec![TokenType::Identity])]),
            Clause::new(vec![TokenType::Where])
                .optional()
                .with_children(vec![filter_expression()]),
        ],
    )
}

/// Условие фильтрации после WHERE
fn filter_expression() -> Clause {
    Clause::new(vec![
        TokenType::Identity,
        TokenType::Value,
        TokenType::Integer,
    ])
    .repeatable()
    .with_children(vec![Clause::new(vec![
        TokenType::Like,
        TokenType::Equal,
        TokenType::And,
        TokenType::Or,
    ])
    .optional()
    .repeatable()])
}
