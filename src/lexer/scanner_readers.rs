// Методы чтения специальных токенов для сканера

impl Scanner {
    /// Читает значение в кавычках ('...' или "...")
    ///
    /// Закрывающая кавычка совпадает с открывающей; ограничители
    /// отбрасываются, пустое значение допустимо.
    // TODO: поддержка экранированной кавычки внутри значения
    pub(crate) fn read_value(&mut self) -> Result<Token> {
        let start_position = self.current_position.clone();
        let quote_char = self.advance();
        let mut value = String::new();

        loop {
            match self.peek() {
                Some(ch) if ch == quote_char => {
                    self.advance();
                    return Ok(Token::new(TokenType::Value, value, start_position));
                }
                Some(_) => {
                    value.push(self.advance());
                }
                None => {
                    return Err(Error::lexical(
                        format!("unterminated value starting with {}", quote_char),
                        start_position.offset,
                    ));
                }
            }
        }
    }

    /// Читает идентификатор в обратных кавычках
    ///
    /// Ограничители отбрасываются, регистр содержимого сохраняется.
    pub(crate) fn read_quoted_identity(&mut self) -> Result<Token> {
        let start_position = self.current_position.clone();
        self.advance(); // `
        let mut value = String::new();

        loop {
            match self.peek() {
                Some('`') => {
                    self.advance();
                    return Ok(Token::new(TokenType::Identity, value, start_position));
                }
                Some(_) => {
                    value.push(self.advance());
                }
                None => {
                    return Err(Error::lexical(
                        "unterminated quoted identity",
                        start_position.offset,
                    ));
                }
            }
        }
    }

    /// Читает максимальную последовательность цифр
    pub(crate) fn read_integer(&mut self) -> Result<Token> {
        let start_position = self.current_position.clone();
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                value.push(self.advance());
            } else {
                break;
            }
        }

        Ok(Token::new(TokenType::Integer, value, start_position))
    }

    /// Читает слово и классифицирует его по таблице зарезервированных слов
    ///
    /// Совпадение дает зарегистрированный тип токена, промах — `Identity`.
    /// В обоих случаях значение токена — исходное написание слова.
    pub(crate) fn read_word(&mut self) -> Result<Token> {
        let start_position = self.current_position.clone();
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                value.push(self.advance());
            } else {
                break;
            }
        }

        let folded = value.to_uppercase();
        let token_type = self
            .keywords
            .get(folded.as_str())
            .copied()
            .unwrap_or(TokenType::Identity);

        Ok(Token::new(token_type, value, start_position))
    }
}
