//! Тесты грамматической модели и компилятора грамматики

use crate::common::Error;
use crate::lexer::{Clause, Dialect, Scanner, Statement, TokenType};

#[test]
fn test_clause_rendering() {
    let clause = Clause::new(vec![TokenType::Show]);
    assert_eq!(clause.to_string(), "SHOW");

    let clause = Clause::new(vec![TokenType::Describe, TokenType::Desc]);
    assert_eq!(clause.to_string(), "{DESCRIBE|DESC}");

    let clause = Clause::new(vec![TokenType::Full]).optional();
    assert_eq!(clause.to_string(), "[FULL]");

    let clause = Clause::new(vec![TokenType::Identity]).optional().repeatable();
    assert_eq!(clause.to_string(), "[<identity>]*");

    let clause = Clause::new(vec![TokenType::If])
        .optional()
        .with_children(vec![
            Clause::new(vec![TokenType::Negate]),
            Clause::new(vec![TokenType::Exists]),
        ]);
    assert_eq!(clause.to_string(), "[IF] NOT EXISTS");
}

#[test]
fn test_statement_rendering() {
    let statement = Statement::new(
        "DROP",
        vec![
            Clause::new(vec![TokenType::Drop]),
            Clause::new(vec![TokenType::Table, TokenType::Schema]),
            Clause::new(vec![TokenType::Identity]),
        ],
    );
    assert_eq!(statement.to_string(), "DROP: DROP {TABLE|SCHEMA} <identity>");
    assert_eq!(
        statement.introducers(),
        &[TokenType::Drop]
    );
}

#[test]
fn test_empty_clause_is_configuration_error() {
    let dialect = Dialect::new(
        "broken",
        vec![Statement::new(
            "BROKEN",
            vec![Clause::new(vec![TokenType::Show]), Clause::new(vec![])],
        )],
    );

    let err = dialect.init().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("BROKEN"));
}

#[test]
fn test_init_is_idempotent() {
    let dialect = crate::lexer::sql_dialect();

    dialect.init().unwrap();
    let first = dialect.keywords().unwrap();

    dialect.init().unwrap();
    let second = dialect.keywords().unwrap();

    // Повторная компиляция дает ту же таблицу, включая порядок записей
    assert_eq!(first.len(), second.len());
    for (left, right) in first.iter().zip(second.iter()) {
        assert_eq!(left, right);
    }
}

#[test]
fn test_keywords_compiles_lazily() {
    let dialect = crate::lexer::sql_dialect();

    // init не вызывался, keywords компилирует таблицу сам
    let table = dialect.keywords().unwrap();
    assert_eq!(table.get("SHOW"), Some(&TokenType::Show));
    assert_eq!(table.get("NOT"), Some(&TokenType::Negate));
    assert_eq!(table.get("INT"), Some(&TokenType::TypeInteger));

    // Незарегистрированные слова в таблице отсутствуют
    assert_eq!(table.get("TRIGGER"), None);
    assert_eq!(table.get("INDEX"), None);
    assert_eq!(table.get("CHARSET"), None);
    assert_eq!(table.get("AUTO_INCREMENT"), None);
}

/// Диалект из двух операторов, регистрирующих "DESC" под разными типами
fn conflicting_dialect(describe_first: bool) -> Dialect {
    let describe = Statement::new(
        "DESCRIBE",
        vec![
            Clause::new(vec![TokenType::Describe, TokenType::Desc]),
            Clause::new(vec![TokenType::Identity]),
        ],
    );
    let select = Statement::new(
        "SELECT",
        vec![
            Clause::new(vec![TokenType::Select]),
            Clause::new(vec![TokenType::Identity]).repeatable(),
            Clause::new(vec![TokenType::Order]).optional().with_children(vec![
                Clause::new(vec![TokenType::By]),
                Clause::new(vec![TokenType::Ascending, TokenType::Descending]).optional(),
            ]),
        ],
    );

    let statements = if describe_first {
        vec![describe, select]
    } else {
        vec![select, describe]
    };
    Dialect::new("conflict", statements)
}

#[test]
fn test_first_statement_wins_registration_conflict() {
    // DESCRIBE зарегистрирован раньше: DESC — аббревиатура DESCRIBE
    let dialect = conflicting_dialect(true);
    let mut scanner = Scanner::new("DESC mytable", &dialect).unwrap();
    let tokens = scanner.tokenize().unwrap();
    assert_eq!(tokens[0].token_type, TokenType::Desc);

    // SELECT зарегистрирован раньше: DESC — направление сортировки
    let dialect = conflicting_dialect(false);
    let mut scanner = Scanner::new("DESC mytable", &dialect).unwrap();
    let tokens = scanner.tokenize().unwrap();
    assert_eq!(tokens[0].token_type, TokenType::Descending);
}

#[test]
fn test_later_registration_is_noop() {
    let dialect = conflicting_dialect(true);
    let table = dialect.keywords().unwrap();

    // Оба оператора ссылаются на "DESC"; запись одна и принадлежит первому
    assert_eq!(table.get("DESC"), Some(&TokenType::Desc));
    assert_eq!(table.get("ASC"), Some(&TokenType::Ascending));
}
