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

//! # Introduction
//!
//! Minifront is the front end of a teaching compiler for a one-line
//! mini-language: conditionals, a `print` keyword, identifiers, numeric
//! literals and single-character symbols. It answers one question per
//! line: is it lexically and syntactically valid?
//!
//! ## Pipeline
//!
//! ```text
//! Source Line → Lexer → Tokens → Parser → valid / error
//! ```
//!
//! 1. [`lexer`]: prioritized, longest-match tokenization into
//!    [`Token`]s, failing with a [`LexicalError`].
//! 2. [`parser`]: recursive descent over the token slice, failing with a
//!    [`SyntaxError`].
//! 3. [`report`]: runs both stages and shapes the outcome for text or
//!    JSON output.
//! 4. [`diagnostics`]: rustc-style rendering of any [`error::Diagnostic`].
//!
//! ## Grammar
//!
//! ```text
//! statement        := if_statement | simple_statement
//! if_statement     := "if" condition simple_statement ("else" simple_statement)?
//! condition        := operand (("<" | ">" | "=") operand)?
//! operand          := Identifier | Integer | Float
//! simple_statement := every token up to the next "if" / "else"
//! ```

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod span;

pub use error::{FrontendError, LexicalError, SyntaxError};
pub use lexer::token::{Token, TokenKind};
pub use lexer::tokenize;
pub use parser::parse;
pub use report::{analyze, Report};
pub use span::Span;
