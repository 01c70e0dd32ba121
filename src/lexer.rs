use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::ast::{Token, TokenType};
use crate::error::ParserError;

/// Tokenizes filter query text.
///
/// The lexer owns the set of builtin field names: identifiers are
/// classified as [`TokenType::Builtin`] only when they match this set,
/// which is fixed at construction and never mutated afterwards. All
/// lexical errors are raised here; the parser only ever sees well-formed
/// tokens.
pub struct QueryLexer {
    builtins: HashSet<String>,
}

impl QueryLexer {
    /// A lexer without builtin names; every bare word becomes a Field.
    pub fn new() -> Self {
        QueryLexer {
            builtins: HashSet::new(),
        }
    }

    /// A lexer classifying the given names as builtins.
    pub fn with_builtins<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryLexer {
            builtins: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Scan `input` into an ordered token sequence.
    pub fn tokens(&self, input: &str) -> Result<Vec<Token>, ParserError> {
        let mut scanner = Scanner {
            input: input.chars().collect(),
            position: 0,
            builtins: &self.builtins,
        };
        let mut tokens = Vec::new();

        scanner.skip_whitespace();
        while scanner.current_char().is_some() {
            tokens.push(scanner.next_token()?);
            scanner.skip_whitespace();
        }

        Ok(tokens)
    }
}

impl Default for QueryLexer {
    fn default() -> Self {
        Self::new()
    }
}

struct Scanner<'a> {
    input: Vec<char>,
    position: usize,
    builtins: &'a HashSet<String>,
}

impl Scanner<'_> {
    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParserError> {
        let start = self.position;

        let token = match self.current_char() {
            Some('(') => {
                self.advance();
                Token::new(TokenType::LeftParen, "(", start)
            }
            Some(')') => {
                self.advance();
                Token::new(TokenType::RightParen, ")", start)
            }
            Some('&') => {
                self.advance();
                Token::new(TokenType::And, "&", start)
            }
            Some('|') => {
                self.advance();
                Token::new(TokenType::Or, "|", start)
            }
            Some('=') => {
                self.advance();
                Token::new(TokenType::Equal, "=", start)
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::new(TokenType::LessEqual, "<=", start)
                } else {
                    self.advance();
                    Token::new(TokenType::Less, "<", start)
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::new(TokenType::GreaterEqual, ">=", start)
                } else {
                    self.advance();
                    Token::new(TokenType::Greater, ">", start)
                }
            }
            Some('~') => {
                if self.peek_char(1) == Some('~') {
                    self.advance();
                    self.advance();
                    Token::new(TokenType::Like, "~~", start)
                } else {
                    self.advance();
                    Token::new(TokenType::ILike, "~", start)
                }
            }
            Some('!') => match self.peek_char(1) {
                Some('=') => {
                    self.advance();
                    self.advance();
                    Token::new(TokenType::Unequal, "!=", start)
                }
                Some('~') => {
                    if self.peek_char(2) == Some('~') {
                        self.advance();
                        self.advance();
                        self.advance();
                        Token::new(TokenType::Unlike, "!~~", start)
                    } else {
                        self.advance();
                        self.advance();
                        Token::new(TokenType::IUnlike, "!~", start)
                    }
                }
                _ => return Err(ParserError::InvalidOperator),
            },
            Some(quote) if quote == '\'' || quote == '"' => {
                let lexeme = self.read_string(quote)?;
                Token::new(TokenType::String, lexeme, start)
            }
            // Minus is reserved exclusively for numeric negation.
            Some('-') => {
                if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.read_number(start)?
                } else {
                    return Err(ParserError::SyntaxError);
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(start)?,
            Some(ch) if ch.is_ascii_alphabetic() => {
                let ident = self.read_identifier();
                Token::new(self.classify(&ident), ident, start)
            }
            _ => return Err(ParserError::SyntaxError),
        };

        Ok(token)
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            // Dots form field paths, hyphens appear in locale codes
            // such as de-DE.
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn classify(&self, ident: &str) -> TokenType {
        match ident {
            "true" | "false" => TokenType::Boolean,
            "null" => TokenType::Null,
            "now" => TokenType::Keyword,
            _ if self.builtins.contains(ident) => TokenType::Builtin,
            _ if ident == "path" || ident.starts_with("path.") => TokenType::Path,
            _ => TokenType::Field,
        }
    }

    fn read_string(&mut self, quote: char) -> Result<String, ParserError> {
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some(escaped) => result.push(escaped),
                        None => return Err(ParserError::UnterminatedString),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(ParserError::UnterminatedString)
    }

    fn read_number(&mut self, start: usize) -> Result<Token, ParserError> {
        let mut number = String::new();

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.current_char() == Some('.') {
            if !self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                return Err(ParserError::InvalidNumber);
            }
            number.push('.');
            self.advance();
            while let Some(ch) = self.current_char() {
                if ch.is_ascii_digit() {
                    number.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        // The scan already constrains the shape; parsing as an exact
        // decimal additionally rejects anything a numeric literal in the
        // compiled fragment could not carry (e.g. out-of-range values).
        if Decimal::from_str(&number).is_err() {
            return Err(ParserError::InvalidNumber);
        }

        Ok(Token::new(TokenType::Number, number, start))
    }
}

#[test]
fn test_literal_classification() {
    let lexer = QueryLexer::new();
    let tokens = lexer.tokens("true false null now").unwrap();
    assert_eq!(tokens[0].kind, TokenType::Boolean);
    assert_eq!(tokens[1].kind, TokenType::Boolean);
    assert_eq!(tokens[2].kind, TokenType::Null);
    assert_eq!(tokens[3].kind, TokenType::Keyword);
}

#[test]
fn test_positions() {
    let lexer = QueryLexer::new();
    let tokens = lexer.tokens("title = 'a'").unwrap();
    assert_eq!(tokens[0].position, 0);
    assert_eq!(tokens[1].position, 6);
    assert_eq!(tokens[2].position, 8);
}
