use crate::ast::{BoolOp, CompOp, Expr, Token, TokenGroup, TokenType};
use crate::error::ParserError;

/// Maximum parenthesis nesting depth.
///
/// The grammar is recursive, so deeply nested adversarial input would
/// otherwise grow the native call stack without bound. Exceeding the cap
/// rejects the query like any other malformed input. 32 levels is far
/// beyond any hand-written filter.
pub const MAX_DEPTH: usize = 32;

/// Parses a token stream into an expression tree.
///
/// Grammar, with flat left-associative boolean precedence:
///
/// ```text
/// expr       := term (BooleanOperator term)*
/// term       := '(' expr ')' | comparison
/// comparison := operand Operator operand
/// ```
///
/// `&` and `|` bind equally; only parentheses force grouping. Any token
/// stream that does not reduce to exactly one `expr` is rejected as
/// "Invalid query".
pub struct QueryParser {
    tokens: Vec<Token>,
    position: usize,
}

impl QueryParser {
    pub fn new(tokens: Vec<Token>) -> Self {
        QueryParser {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole stream. An empty stream is a valid empty filter
    /// and parses to `None`.
    pub fn parse(mut self) -> Result<Option<Expr>, ParserError> {
        if self.tokens.is_empty() {
            return Ok(None);
        }

        let expr = self.parse_expr(0)?;

        // Trailing tokens after a complete expression, e.g. a stray
        // closing parenthesis.
        if self.position != self.tokens.len() {
            return Err(ParserError::InvalidQuery);
        }

        Ok(Some(expr))
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn parse_expr(&mut self, depth: usize) -> Result<Expr, ParserError> {
        let mut left = self.parse_term(depth)?;

        while let Some(op) = self
            .current()
            .and_then(|token| BoolOp::from_token_type(token.kind))
        {
            self.advance();
            let right = self.parse_term(depth)?;

            left = Expr::Boolean {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_term(&mut self, depth: usize) -> Result<Expr, ParserError> {
        match self.current() {
            Some(token) if token.kind == TokenType::LeftParen => {
                if depth >= MAX_DEPTH {
                    return Err(ParserError::InvalidQuery);
                }

                self.advance();
                let inner = self.parse_expr(depth + 1)?;

                match self.current() {
                    Some(token) if token.kind == TokenType::RightParen => {
                        self.advance();
                        Ok(Expr::Group(Box::new(inner)))
                    }
                    _ => Err(ParserError::InvalidQuery),
                }
            }
            _ => self.parse_comparison(),
        }
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParserError> {
        let left = self.expect_operand()?;
        let op = self.expect_operator()?;
        let right = self.expect_operand()?;

        Ok(Expr::Comparison { left, op, right })
    }

    fn expect_operand(&mut self) -> Result<Token, ParserError> {
        match self.current() {
            Some(token) if token.group == TokenGroup::Operand => {
                let token = token.clone();
                self.advance();
                Ok(token)
            }
            _ => Err(ParserError::InvalidQuery),
        }
    }

    fn expect_operator(&mut self) -> Result<CompOp, ParserError> {
        let op = self
            .current()
            .and_then(|token| CompOp::from_token_type(token.kind))
            .ok_or(ParserError::InvalidQuery)?;
        self.advance();
        Ok(op)
    }
}
