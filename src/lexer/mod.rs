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

/// Scanner state and the prioritized rule table.
pub mod lexer;

/// Reserved words and the structural subset of them.
pub mod keywords;

/// `Token` and the closed `TokenKind` set.
pub mod token;


use crate::error::LexicalError;
use token::Token;

/// Public entry point for the lexing phase.
///
/// # Example
/// ```
/// use minifront::lexer::tokenize;
/// use minifront::lexer::token::TokenKind;
///
/// let tokens = tokenize("if x<5 print y").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens.len(), 6);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    lexer::Lexer::new(source).scan_tokens()
}
