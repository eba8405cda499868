/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the MINIFRONT
 *            lexer and consumed by the grammar checker.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token**.
///
/// The set is closed: the parser matches on it exhaustively, so adding a
/// category forces every grammar rule to decide what to do with it.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Line → Lexer → TokenKind → Parser → valid / SyntaxError
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    /// A user-defined name such as `x` or `_total2`.
    Identifier,

    /// One of the reserved words `if`, `else`, `print`.
    ///
    /// Keyword detection is handled by `keywords.rs`.
    Keyword,

    /// A whole number, optionally signed: `5`, `-12`.
    Integer,

    /// A decimal number with digits on both sides of the point: `2.0`,
    /// `-0.5`.
    Float,

    /// A single-character operator or separator from
    /// `+ - * / ^ < > = ;`.
    Symbol,
}

impl TokenKind {
    /// Returns `true` for the categories that may stand as a condition
    /// operand: identifiers and numeric literals.
    pub fn is_operand(self) -> bool {
        match self {
            TokenKind::Identifier | TokenKind::Integer | TokenKind::Float => true,
            TokenKind::Keyword | TokenKind::Symbol => false,
        }
    }

    /// The upper-case label used in token dumps (`KEYWORD`, `FLOAT`, ...).
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Symbol => "SYMBOL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Represents a **single lexical token** produced by the lexer.
///
/// # Example Tokens
/// ```text
/// if   →  { kind: Keyword,    lexeme: "if",  span: 0..2 }
/// x    →  { kind: Identifier, lexeme: "x",   span: 3..4 }
/// -5   →  { kind: Integer,    lexeme: "-5",  span: 7..9 }
/// ```
///
/// Tokens are never mutated after the lexer emits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token, sign included.
    pub lexeme: String,

    /// Character offsets of the lexeme within the line.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Returns `true` if this token is the keyword `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Only the lexeme is printed: error messages show what the user wrote,
    /// not the token's internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
