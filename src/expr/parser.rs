//! Recursive-descent evaluator over the token stream
//!
//! Grammar (highest binding last):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | power
//! power  := atom ('^' unary)?
//! atom   := NUMBER | IDENT '(' args ')' | IDENT | '(' expr ')'
//! args   := expr (',' expr)*
//! ```
//!
//! `^` is right-associative and binds tighter than unary minus, so `-2^2`
//! is `-4` and `2^-3` parses. Evaluation happens during the descent; there
//! is no separate AST.

use super::functions;
use super::token::Token;
use crate::error::{EvalError, EvalResult};

/// Single-pass evaluator over a token stream
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a parser over a token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Evaluate the whole stream as a single expression
    pub fn parse(mut self) -> EvalResult<f64> {
        if self.tokens.is_empty() {
            return Err(EvalError::Parse("empty expression".to_string()));
        }
        let value = self.expr()?;
        if self.pos != self.tokens.len() {
            return Err(EvalError::Parse("unexpected trailing input".to_string()));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect_rparen(&mut self, context: &str) -> EvalResult<()> {
        match self.advance() {
            Some(Token::RParen) => Ok(()),
            _ => Err(EvalError::Parse(format!("expected ')' {}", context))),
        }
    }

    fn expr(&mut self) -> EvalResult<f64> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> EvalResult<f64> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> EvalResult<f64> {
        match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                Ok(-self.unary()?)
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> EvalResult<f64> {
        let base = self.atom()?;
        if let Some(Token::Caret) = self.peek() {
            self.advance();
            // right-associative; exponent may carry its own unary sign
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> EvalResult<f64> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                self.expect_rparen("to close group")?;
                Ok(value)
            }
            Some(Token::Ident(name)) => {
                if let Some(Token::LParen) = self.peek() {
                    self.advance();
                    let args = self.args()?;
                    self.expect_rparen(&format!("to close {}(", name))?;
                    return functions::apply(&name, &args);
                }
                if functions::is_function(&name) {
                    return Err(EvalError::Parse(format!("expected '(' after {}", name)));
                }
                functions::constant(&name).ok_or(EvalError::UnknownName(name))
            }
            Some(token) => Err(EvalError::Parse(format!("unexpected token {:?}", token))),
            None => Err(EvalError::Parse("unexpected end of expression".to_string())),
        }
    }

    fn args(&mut self) -> EvalResult<Vec<f64>> {
        let mut args = Vec::new();
        if let Some(Token::RParen) = self.peek() {
            return Ok(args);
        }
        args.push(self.expr()?);
        while let Some(Token::Comma) = self.peek() {
            self.advance();
            args.push(self.expr()?);
        }
        Ok(args)
    }
}
