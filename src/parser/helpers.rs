/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the MINIFRONT project.
 *
 * MINIFRONT is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::lexer::keywords::is_structural;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::Span;

/// Symbols that may join the two operands of a condition.
const RELATIONAL_SYMBOLS: [&str; 3] = ["<", ">", "="];

impl<'t> Parser<'t> {
    /// Matches a keyword and consumes it if present.
    pub(crate) fn match_keyword(&mut self, kw: &str) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Checks for a keyword without consuming it.
    pub(crate) fn check_keyword(&self, kw: &str) -> bool {
        self.peek().is_some_and(|token| token.is_keyword(kw))
    }

    /// Returns true if the current token is `if` or `else`.
    pub(crate) fn at_structural_keyword(&self) -> bool {
        self.peek()
            .is_some_and(|token| token.kind == TokenKind::Keyword && is_structural(&token.lexeme))
    }

    /// Consumes the current token if it can stand as a condition operand.
    pub(crate) fn match_operand(&mut self) -> bool {
        if self.peek().is_some_and(|token| token.kind.is_operand()) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a relational symbol (`<`, `>`, `=`) and returns it.
    pub(crate) fn match_relational(&mut self) -> Option<&'t Token> {
        let token = self.peek()?;
        if token.kind == TokenKind::Symbol && RELATIONAL_SYMBOLS.contains(&token.lexeme.as_str()) {
            self.advance()
        } else {
            None
        }
    }

    /// Advances one token forward, returning the consumed token.
    pub(crate) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    /// Returns the current token without consuming it.
    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Lexeme of the current token, for error messages.
    pub(crate) fn found(&self) -> Option<String> {
        self.peek().map(|token| token.lexeme.clone())
    }

    /// Span of the current token, or a zero-width span just past the last
    /// token when the stream is exhausted.
    pub(crate) fn current_span(&self) -> Span {
        match self.peek() {
            Some(token) => token.span,
            None => Span::point(self.tokens.last().map_or(0, |token| token.span.end)),
        }
    }

    /// Returns true once every token has been consumed.
    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn keyword_matching_consumes_only_on_hit() {
        let tokens = tokenize("if x").unwrap();
        let mut parser = Parser::new(&tokens);
        assert!(!parser.match_keyword("else"));
        assert_eq!(parser.current, 0);
        assert!(parser.match_keyword("if"));
        assert_eq!(parser.current, 1);
    }

    #[test]
    fn print_is_not_structural() {
        let tokens = tokenize("print else").unwrap();
        let mut parser = Parser::new(&tokens);
        assert!(!parser.at_structural_keyword());
        parser.advance();
        assert!(parser.at_structural_keyword());
    }

    #[test]
    fn relational_symbols_only() {
        let tokens = tokenize("< + =").unwrap();
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.match_relational().map(|t| t.lexeme.as_str()), Some("<"));
        assert!(parser.match_relational().is_none());
        parser.advance();
        assert_eq!(parser.match_relational().map(|t| t.lexeme.as_str()), Some("="));
        assert!(parser.is_at_end());
    }

    #[test]
    fn span_past_the_end() {
        let tokens = tokenize("if  xy").unwrap();
        let mut parser = Parser::new(&tokens);
        parser.advance();
        parser.advance();
        assert_eq!(parser.current_span(), Span::point(6));
        assert_eq!(parser.found(), None);
        assert!(parser.advance().is_none());
    }
}
