/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      statements.rs
 * Purpose:   Grammar rules of the recursive-descent checker.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 *
 * License:
 * This file is part of the MINIFRONT project.
 *
 * MINIFRONT is dual-licensed under the terms of:
 *   - The MIT License
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

//! The grammar, one method per rule:
//!
//! ```text
//! statement        := if_statement | simple_statement
//! if_statement     := "if" condition simple_statement ("else" simple_statement)?
//! condition        := operand (("<" | ">" | "=") operand)?
//! operand          := Identifier | Integer | Float
//! simple_statement := every token up to the next "if" / "else"
//! ```
//!
//! Both branches of an `if` are simple statements. A nested `if` therefore
//! ends the current branch and starts a new top-level statement.

use tracing::trace;

use crate::error::SyntaxError;
use crate::lexer::keywords::{ELSE, IF};
use crate::parser::parser::Parser;

impl<'t> Parser<'t> {
    /// Parses one statement.
    ///
    /// # Errors
    /// - [`SyntaxError::ElseBeforeIf`] when the statement would start with
    ///   `else`.
    pub(crate) fn statement(&mut self) -> Result<(), SyntaxError> {
        trace!(at = self.current, "statement");

        if self.match_keyword(IF) {
            return self.if_statement();
        }

        if self.check_keyword(ELSE) {
            return Err(SyntaxError::ElseBeforeIf {
                span: self.current_span(),
            });
        }

        self.simple_statement()
    }

    /// Parses the remainder of an `if` statement; `if` is already consumed.
    fn if_statement(&mut self) -> Result<(), SyntaxError> {
        trace!(at = self.current, "if_statement");

        self.condition()?;
        self.simple_statement()?;

        if self.match_keyword(ELSE) {
            self.simple_statement()?;
        }

        Ok(())
    }

    /// Parses `operand (relational operand)?`.
    ///
    /// # Errors
    /// - [`SyntaxError::MissingCondition`] when no operand follows `if`.
    /// - [`SyntaxError::MissingOperand`] when a relational symbol has no
    ///   right-hand side.
    fn condition(&mut self) -> Result<(), SyntaxError> {
        trace!(at = self.current, "condition");

        if !self.match_operand() {
            return Err(SyntaxError::MissingCondition {
                found: self.found(),
                span: self.current_span(),
            });
        }

        if let Some(operator) = self.match_relational() {
            if !self.match_operand() {
                return Err(SyntaxError::MissingOperand {
                    operator: operator.lexeme.clone(),
                    found: self.found(),
                    span: self.current_span(),
                });
            }
        }

        Ok(())
    }

    /// Consumes the maximal run of tokens that are not `if` or `else`.
    ///
    /// The run may be empty, except that it may not be cut short by an
    /// immediate `else`: that means a branch body is missing.
    fn simple_statement(&mut self) -> Result<(), SyntaxError> {
        trace!(at = self.current, "simple_statement");

        if self.check_keyword(ELSE) {
            return Err(SyntaxError::MissingBody {
                span: self.current_span(),
            });
        }

        while !self.is_at_end() && !self.at_structural_keyword() {
            self.advance();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SyntaxError;
    use crate::lexer::tokenize;
    use crate::parser::parse;
    use crate::span::Span;

    fn check(source: &str) -> Result<(), SyntaxError> {
        let tokens = tokenize(source).expect("test line should tokenize");
        parse(&tokens)
    }

    #[test]
    fn empty_line_is_valid() {
        assert_eq!(check(""), Ok(()));
        assert_eq!(check("   "), Ok(()));
    }

    #[test]
    fn valid_lines() {
        for source in [
            "if x<5 print y",
            "if x print y",
            "if 2.0 = y print y else print x",
            "print x + 1",
            "2.0 < x",
            "x = y * 3 ; print x",
            "if a > b print a else print b",
            "if x",
            "if x print y else",
            "if x if y print z",
            "print a if b print c",
            "if x print y else if z print w",
            "if x + 1 print y",
        ] {
            assert_eq!(check(source), Ok(()), "{source:?} should be valid");
        }
    }

    #[test]
    fn else_at_statement_start() {
        assert_eq!(
            check("else x"),
            Err(SyntaxError::ElseBeforeIf {
                span: Span::new(0, 4)
            })
        );
    }

    #[test]
    fn second_else_starts_a_new_statement() {
        assert_eq!(
            check("if x print y else print z else w"),
            Err(SyntaxError::ElseBeforeIf {
                span: Span::new(26, 30)
            })
        );
    }

    #[test]
    fn if_without_condition() {
        assert_eq!(
            check("if"),
            Err(SyntaxError::MissingCondition {
                found: None,
                span: Span::point(2)
            })
        );
        assert_eq!(
            check("if print y"),
            Err(SyntaxError::MissingCondition {
                found: Some("print".into()),
                span: Span::new(3, 8)
            })
        );
        assert!(matches!(
            check("if < 3 print y"),
            Err(SyntaxError::MissingCondition { .. })
        ));
    }

    #[test]
    fn comparison_without_right_operand() {
        assert_eq!(
            check("if x < print y"),
            Err(SyntaxError::MissingOperand {
                operator: "<".into(),
                found: Some("print".into()),
                span: Span::new(7, 12)
            })
        );
        assert!(matches!(
            check("if x ="),
            Err(SyntaxError::MissingOperand { found: None, .. })
        ));
    }

    #[test]
    fn else_right_after_condition_is_missing_body() {
        assert_eq!(
            check("if x else y"),
            Err(SyntaxError::MissingBody {
                span: Span::new(5, 9)
            })
        );
        assert!(matches!(
            check("if x print y else else z"),
            Err(SyntaxError::MissingBody { .. })
        ));
    }

    #[test]
    fn first_error_wins() {
        assert!(matches!(
            check("else if"),
            Err(SyntaxError::ElseBeforeIf { .. })
        ));
        assert!(matches!(
            check("print x if else y"),
            Err(SyntaxError::MissingCondition { .. })
        ));
    }
}
