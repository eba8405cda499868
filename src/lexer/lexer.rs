/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Turns one line of source text into classified tokens.
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

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::LexicalError;
use crate::lexer::keywords::is_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// The categories the lexer tries at each position, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// A numeral glued to identifier characters: `2x`, `7_y`, `2.5e`.
    MalformedNumber,
    Float,
    Integer,
    /// Keyword or identifier, decided after the whole word is read.
    Word,
    Symbol,
}

impl Rule {
    fn is_numeric(self) -> bool {
        matches!(self, Rule::MalformedNumber | Rule::Float | Rule::Integer)
    }
}

/// Anchored patterns for every [`Rule`].
///
/// The first rule that matches wins and takes its longest match. The
/// malformed-number rule sits first so `2x` is rejected as a whole before
/// `2` could be accepted as an integer.
static RULES: LazyLock<Vec<(Rule, Regex)>> = LazyLock::new(|| {
    [
        (
            Rule::MalformedNumber,
            r"^-?[0-9]+(?:\.[0-9]+)?[A-Za-z_][A-Za-z0-9_]*",
        ),
        (Rule::Float, r"^-?[0-9]+\.[0-9]+"),
        (Rule::Integer, r"^-?[0-9]+"),
        (Rule::Word, r"^[A-Za-z_][A-Za-z0-9_]*"),
        (Rule::Symbol, r"^[-+*/^<>=;]"),
    ]
    .into_iter()
    .map(|(rule, pattern)| {
        let regex = Regex::new(pattern).expect("lexer rule patterns are valid regexes");
        (rule, regex)
    })
    .collect()
});

/// Scanner state for a single line.
///
/// The cursor is tracked twice: `current` is a byte offset for slicing the
/// source, `column` is the matching character offset used in spans.
pub struct Lexer<'src> {
    source: &'src str,
    current: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            current: 0,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the line.
    ///
    /// # Behavior
    /// - Skips spaces, tabs, carriage returns and newlines
    /// - Emits tokens in source order
    /// - Stops at the first lexical error
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexicalError> {
        while let Some(ch) = self.peek() {
            if is_whitespace(ch) {
                self.current += ch.len_utf8();
                self.column += 1;
                continue;
            }

            if let Err(err) = self.scan_token(ch) {
                debug!(%err, "lexical error");
                return Err(err);
            }
        }

        debug!(tokens = self.tokens.len(), "tokenized line");
        Ok(self.tokens)
    }

    /// Scans and emits a single token starting with `ch`.
    ///
    /// Walks [`RULES`] in order. A leading `-` may only start a numeric
    /// literal when [`Lexer::sign_allowed`] says so; otherwise the numeric
    /// rules are skipped and it falls through to `Symbol`.
    fn scan_token(&mut self, ch: char) -> Result<(), LexicalError> {
        let source = self.source;
        let rest = &source[self.current..];
        let unsigned_only = ch == '-' && !self.sign_allowed();

        for (rule, regex) in RULES.iter() {
            if unsigned_only && rule.is_numeric() {
                continue;
            }

            let Some(found) = regex.find(rest) else {
                continue;
            };

            let lexeme = found.as_str();
            let span = Span::new(self.column, self.column + lexeme.chars().count());

            let kind = match rule {
                Rule::MalformedNumber => return Err(invalid_identifier(lexeme, span)),
                Rule::Float => TokenKind::Float,
                Rule::Integer => TokenKind::Integer,
                Rule::Word if is_keyword(lexeme) => TokenKind::Keyword,
                Rule::Word => TokenKind::Identifier,
                Rule::Symbol => TokenKind::Symbol,
            };

            trace!(?kind, lexeme, start = span.start, "token");
            self.tokens.push(Token::new(kind, lexeme, span));
            self.current += lexeme.len();
            self.column = span.end;
            return Ok(());
        }

        Err(LexicalError::UnrecognizedCharacter {
            character: ch,
            position: self.column,
        })
    }

    /// A `-` binds to the following digits only when it cannot be read as a
    /// binary minus, i.e. when no operand token directly precedes it.
    fn sign_allowed(&self) -> bool {
        self.tokens.last().map_or(true, |prev| !prev.kind.is_operand())
    }

    /// Returns the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }
}

/// Builds the error for a numeral followed by identifier characters.
///
/// A granted sign is not part of the offending identifier, so it is dropped
/// from both the reported lexeme and its span.
fn invalid_identifier(lexeme: &str, span: Span) -> LexicalError {
    let (lexeme, start) = match lexeme.strip_prefix('-') {
        Some(unsigned) => (unsigned, span.start + 1),
        None => (lexeme, span.start),
    };

    LexicalError::InvalidIdentifier {
        lexeme: lexeme.to_string(),
        span: Span::new(start, span.end),
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}
