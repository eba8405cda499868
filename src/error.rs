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

use crate::span::Span;
use serde::Serialize;
use thiserror::Error;

/// Uniform view over every error the front end can raise, used by the
/// diagnostic printer and the report builder.
pub trait Diagnostic: std::error::Error {
    /// Stable error code (L0001, S0002, …)
    fn code(&self) -> &'static str;

    /// Primary source location
    fn span(&self) -> Span;

    /// Optional note / help text
    fn help(&self) -> Option<&'static str> {
        None
    }
}

/// Raised by the lexer. Lexing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexicalError {
    /// No token category accepts the character at `position`.
    #[error("invalid character '{character}' at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },

    /// A numeral runs straight into identifier characters (`2x`, `9_a`).
    #[error("invalid identifier: {lexeme}")]
    InvalidIdentifier { lexeme: String, span: Span },
}

impl Diagnostic for LexicalError {
    fn code(&self) -> &'static str {
        match self {
            LexicalError::UnrecognizedCharacter { .. } => "L0001",
            LexicalError::InvalidIdentifier { .. } => "L0002",
        }
    }

    fn span(&self) -> Span {
        match self {
            LexicalError::UnrecognizedCharacter { position, .. } => {
                Span::new(*position, position + 1)
            }
            LexicalError::InvalidIdentifier { span, .. } => *span,
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            LexicalError::UnrecognizedCharacter { .. } => {
                Some("allowed symbols are + - * / ^ < > = ;")
            }
            LexicalError::InvalidIdentifier { .. } => Some("identifiers can't start with digits"),
        }
    }
}

/// Raised by the parser. The first violated rule ends the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxError {
    /// `else` where a new statement was expected.
    #[error("'else' occurs before 'if'")]
    ElseBeforeIf { span: Span },

    /// `if` not followed by an identifier or number.
    #[error(
        "missing condition after 'if', found {}",
        describe(.found.as_deref())
    )]
    MissingCondition { found: Option<String>, span: Span },

    /// A relational symbol inside a condition with nothing to compare against.
    #[error(
        "expected an operand after '{operator}', found {}",
        describe(.found.as_deref())
    )]
    MissingOperand {
        operator: String,
        found: Option<String>,
        span: Span,
    },

    /// A branch body was required but `else` came first.
    #[error("missing body before 'else'")]
    MissingBody { span: Span },
}

fn describe(found: Option<&str>) -> String {
    match found {
        Some(lexeme) => format!("'{lexeme}'"),
        None => "end of input".to_string(),
    }
}

impl Diagnostic for SyntaxError {
    fn code(&self) -> &'static str {
        match self {
            SyntaxError::ElseBeforeIf { .. } => "S0001",
            SyntaxError::MissingCondition { .. } => "S0002",
            SyntaxError::MissingOperand { .. } => "S0003",
            SyntaxError::MissingBody { .. } => "S0004",
        }
    }

    fn span(&self) -> Span {
        match self {
            SyntaxError::ElseBeforeIf { span }
            | SyntaxError::MissingCondition { span, .. }
            | SyntaxError::MissingOperand { span, .. }
            | SyntaxError::MissingBody { span } => *span,
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            SyntaxError::ElseBeforeIf { .. } => Some("an 'else' branch must follow an 'if' statement"),
            SyntaxError::MissingCondition { .. } => {
                Some("a condition is an identifier or number, optionally compared with < > =")
            }
            SyntaxError::MissingOperand { .. } => None,
            SyntaxError::MissingBody { .. } => Some("add a statement between the condition and 'else'"),
        }
    }
}

/// Either stage's failure, for callers that run the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl FrontendError {
    /// `"lexical"` or `"syntax"`.
    pub fn stage(&self) -> &'static str {
        match self {
            FrontendError::Lexical(_) => "lexical",
            FrontendError::Syntax(_) => "syntax",
        }
    }
}

impl Diagnostic for FrontendError {
    fn code(&self) -> &'static str {
        match self {
            FrontendError::Lexical(e) => e.code(),
            FrontendError::Syntax(e) => e.code(),
        }
    }

    fn span(&self) -> Span {
        match self {
            FrontendError::Lexical(e) => e.span(),
            FrontendError::Syntax(e) => e.span(),
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            FrontendError::Lexical(e) => e.help(),
            FrontendError::Syntax(e) => e.help(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_messages() {
        let err = LexicalError::UnrecognizedCharacter {
            character: '$',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid character '$' at position 3");
        assert_eq!(err.span(), Span::new(3, 4));

        let err = LexicalError::InvalidIdentifier {
            lexeme: "2x".into(),
            span: Span::new(0, 2),
        };
        assert_eq!(err.to_string(), "invalid identifier: 2x");
        assert_eq!(err.code(), "L0002");
    }

    #[test]
    fn syntax_messages_describe_what_was_found() {
        let err = SyntaxError::MissingCondition {
            found: None,
            span: Span::point(2),
        };
        assert_eq!(err.to_string(), "missing condition after 'if', found end of input");

        let err = SyntaxError::MissingOperand {
            operator: "<".into(),
            found: Some("print".into()),
            span: Span::new(7, 12),
        };
        assert_eq!(err.to_string(), "expected an operand after '<', found 'print'");
    }

    #[test]
    fn frontend_error_delegates() {
        let err: FrontendError = SyntaxError::ElseBeforeIf {
            span: Span::new(0, 4),
        }
        .into();
        assert_eq!(err.stage(), "syntax");
        assert_eq!(err.code(), "S0001");
        assert_eq!(err.to_string(), "'else' occurs before 'if'");
    }

    #[test]
    fn errors_serialize_with_kind_tag() {
        let err = SyntaxError::MissingBody {
            span: Span::new(5, 9),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "missing_body");
        assert_eq!(json["span"]["start"], 5);
    }
}
