//! Сканер SQL для rustlex
//!
//! Преобразует входной текст в последовательность токенов за один проход
//! без возврата. Классификация слов определяется таблицей зарезервированных
//! слов, скомпилированной из грамматики диалекта: слово из таблицы дает
//! зарегистрированный тип токена, любое другое — `Identity`.

use crate::common::{Error, Result};
use crate::lexer::dialect::{Dialect, KeywordTable};
use crate::lexer::token::{Position, Token, TokenType};
use std::sync::Arc;

/// Сканер SQL
///
/// Создается заново для каждого входного текста; между потоками не
/// разделяется. Таблица зарезервированных слов — общая, только для чтения.
pub struct Scanner {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
    /// Текущая позиция для диагностики
    current_position: Position,
    /// Таблица зарезервированных слов диалекта
    keywords: Arc<KeywordTable>,
    /// Признак завершения ленивой последовательности
    finished: bool,
}

impl Scanner {
    /// Создает новый сканер для входного текста и диалекта
    ///
    /// При первом обращении к неинициализированному диалекту компилирует
    /// его таблицу зарезервированных слов.
    pub fn new(input: &str, dialect: &Dialect) -> Result<Self> {
        Ok(Self {
            input: input.chars().collect(),
            position: 0,
            current_position: Position::start(),
            keywords: dialect.keywords()?,
            finished: false,
        })
    }

    /// Возвращает следующий токен
    ///
    /// Разделитель операторов `;` поглощается молча и токеном не становится.
    /// После конца входного текста каждый вызов возвращает `Eof`.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            self.skip_whitespace();

            match self.peek() {
                None => {
                    return Ok(Token::new(
                        TokenType::Eof,
                        String::new(),
                        self.current_position.clone(),
                    ));
                }
                Some(';') => {
                    self.advance();
                    continue;
                }
                Some(_) => break,
            }
        }

        let start_position = self.current_position.clone();
        let current_char = self.input[self.position];

        match current_char {
            // Значения в кавычках
            '\'' | '"' => self.read_value(),

            // Идентификаторы в обратных кавычках
            '`' => self.read_quoted_identity(),

            // Целые числа
            '0'..='9' => self.read_integer(),

            // Слова: ключевые слова диалекта или идентификаторы
            ch if ch.is_alphabetic() || ch == '_' => self.read_word(),

            // Пунктуация и операторы
            '=' => Ok(self.read_single_char_token(TokenType::Equal)),
            ',' => Ok(self.read_single_char_token(TokenType::Comma)),
            '*' => Ok(self.read_single_char_token(TokenType::Star)),
            '(' => Ok(self.read_single_char_token(TokenType::LeftParenthesis)),
            ')' => Ok(self.read_single_char_token(TokenType::RightParenthesis)),

            // Нераспознанный символ
            ch => Err(Error::lexical(
                format!("unexpected character '{}'", ch),
                start_position.offset,
            )),
        }
    }

    /// Возвращает все токены входного текста; последний элемент — `Eof`
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.token_type == TokenType::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    // === Вспомогательные методы ===

    /// Возвращает текущий символ и продвигает позицию
    pub(crate) fn advance(&mut self) -> char {
        if self.position >= self.input.len() {
            return '\0';
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.current_position.line += 1;
            self.current_position.column = 1;
        } else {
            self.current_position.column += 1;
        }
        self.current_position.offset += 1;

        ch
    }

    /// Возвращает следующий символ без продвижения позиции
    pub(crate) fn peek(&self) -> Option<char> {
        if self.position >= self.input.len() {
            None
        } else {
            Some(self.input[self.position])
        }
    }

    /// Пропускает пробельные символы
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Читает токен из одного символа
    pub(crate) fn read_single_char_token(&mut self, token_type: TokenType) -> Token {
        let start_position = self.current_position.clone();
        let ch = self.advance();
        Token::new(token_type, ch.to_string(), start_position)
    }
}

/// Ленивая последовательность токенов
///
/// Лексическая ошибка становится терминальным токеном `Error` с сообщением
/// в качестве значения; после `Eof` или `Error` последовательность пуста.
impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) => {
                if token.token_type == TokenType::Eof {
                    self.finished = true;
                }
                Some(token)
            }
            Err(err) => {
                self.finished = true;
                Some(Token::new(
                    TokenType::Error,
                    err.to_string(),
                    self.current_position.clone(),
                ))
            }
        }
    }
}

// Подключаем методы чтения из отдельного файла
include!("scanner_readers.rs");
