/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      parser.rs
 * Purpose:   Owns the recursive-descent cursor and the top-level driver.
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

use tracing::debug;

use crate::error::SyntaxError;
use crate::lexer::token::Token;

/// The core recursive-descent grammar checker.
///
/// This structure maintains:
/// - The token stream produced by the lexer (borrowed, never modified)
/// - The current cursor position into that stream
///
/// The grammar rules live in `statements.rs` and the cursor primitives in
/// `helpers.rs`, both as additional `impl Parser` blocks.
pub struct Parser<'t> {
    /// Complete list of tokens to be checked.
    pub(crate) tokens: &'t [Token],

    /// Current cursor position within the token stream.
    pub(crate) current: usize,
}

/// Public entry point for the parsing phase.
///
/// Runs the whole grammar over `tokens` and returns `Ok(())` when the line
/// is syntactically valid. The first violated rule is returned as the
/// error; nothing is recovered.
///
/// # Pipeline
/// ```text
/// Source Line → Lexer → Tokens → Parser → valid / SyntaxError
/// ```
///
/// # Example
/// ```
/// use minifront::{parse, tokenize};
///
/// let tokens = tokenize("if x<5 print y").unwrap();
/// assert!(parse(&tokens).is_ok());
/// ```
pub fn parse(tokens: &[Token]) -> Result<(), SyntaxError> {
    Parser::new(tokens).parse()
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    /// Checks statements until the token stream is exhausted.
    ///
    /// # Behavior
    /// - An empty stream is accepted immediately.
    /// - Tokens left over after a statement start the next statement.
    /// - Every statement consumes at least one token or fails, so the loop
    ///   always terminates.
    pub fn parse(&mut self) -> Result<(), SyntaxError> {
        let mut statements = 0usize;

        while !self.is_at_end() {
            if let Err(err) = self.statement() {
                debug!(%err, at = self.current, "syntax error");
                return Err(err);
            }
            statements += 1;
        }

        debug!(statements, tokens = self.tokens.len(), "line is syntactically valid");
        Ok(())
    }
}
