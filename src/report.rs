/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      report.rs
 * Purpose:   Runs both front-end stages over a line and shapes the outcome
 *            for display or JSON output.
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

use serde::Serialize;

use crate::error::{Diagnostic, FrontendError};
use crate::lexer::token::Token;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::span::Span;

/// The outcome of analyzing one line.
///
/// `tokens` holds whatever the lexer produced: the full stream when lexing
/// succeeded (even if parsing then failed), nothing after a lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub source: String,
    pub tokens: Vec<Token>,
    pub outcome: Result<(), FrontendError>,
}

/// Serializable shape of a [`Report`].
#[derive(Debug, Serialize)]
pub struct ReportJson<'a> {
    pub source: &'a str,
    pub valid: bool,
    pub tokens: &'a [Token],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorJson>,
}

/// Serializable shape of the error, flattened for consumers that do not
/// know the Rust enum layout.
#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub stage: &'static str,
    pub code: &'static str,
    pub message: String,
    pub span: Span,
}

/// Tokenizes then parses `source`; parsing only runs when lexing succeeds.
pub fn analyze(source: &str) -> Report {
    let (tokens, outcome) = match tokenize(source) {
        Ok(tokens) => {
            let outcome = parse(&tokens).map_err(FrontendError::from);
            (tokens, outcome)
        }
        Err(err) => (Vec::new(), Err(FrontendError::from(err))),
    };

    Report {
        source: source.to_string(),
        tokens,
        outcome,
    }
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&FrontendError> {
        self.outcome.as_ref().err()
    }

    /// One `Token Type: ..., Token Value: ...` line per token.
    pub fn token_listing(&self) -> String {
        self.tokens
            .iter()
            .map(|token| format!("Token Type: {}, Token Value: {}\n", token.kind, token.lexeme))
            .collect()
    }

    /// Section header naming the outcome, as printed by the binary.
    pub fn heading(&self) -> &'static str {
        match self.error() {
            None => "--- No Errors ---",
            Some(FrontendError::Lexical(_)) => "--- Lexical Error ---",
            Some(FrontendError::Syntax(_)) => "--- Syntactic Error ---",
        }
    }

    pub fn to_json(&self) -> ReportJson<'_> {
        ReportJson {
            source: &self.source,
            valid: self.is_valid(),
            tokens: &self.tokens,
            error: self.error().map(|err| ErrorJson {
                stage: err.stage(),
                code: err.code(),
                message: err.to_string(),
                span: err.span(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexicalError, SyntaxError};

    #[test]
    fn valid_line_lists_tokens() {
        let report = analyze("if x<5 print y");
        assert!(report.is_valid());
        assert_eq!(report.heading(), "--- No Errors ---");
        assert_eq!(
            report.token_listing(),
            "Token Type: KEYWORD, Token Value: if\n\
             Token Type: IDENTIFIER, Token Value: x\n\
             Token Type: SYMBOL, Token Value: <\n\
             Token Type: INTEGER, Token Value: 5\n\
             Token Type: KEYWORD, Token Value: print\n\
             Token Type: IDENTIFIER, Token Value: y\n"
        );
    }

    #[test]
    fn syntax_error_keeps_tokens() {
        let report = analyze("else x");
        assert_eq!(report.tokens.len(), 2);
        assert_eq!(report.heading(), "--- Syntactic Error ---");
        assert!(matches!(
            report.error(),
            Some(FrontendError::Syntax(SyntaxError::ElseBeforeIf { .. }))
        ));
    }

    #[test]
    fn lexical_error_skips_parsing() {
        let report = analyze("else 2x");
        assert!(report.tokens.is_empty());
        assert_eq!(report.heading(), "--- Lexical Error ---");
        assert!(matches!(
            report.error(),
            Some(FrontendError::Lexical(LexicalError::InvalidIdentifier { .. }))
        ));
    }

    #[test]
    fn json_shape() {
        let report = analyze("if");
        let json = serde_json::to_value(report.to_json()).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["tokens"][0]["kind"], "KEYWORD");
        assert_eq!(json["tokens"][0]["lexeme"], "if");
        assert_eq!(json["error"]["stage"], "syntax");
        assert_eq!(json["error"]["code"], "S0002");
        assert_eq!(json["error"]["span"]["start"], 2);

        let json = serde_json::to_value(analyze("print 2.0").to_json()).unwrap();
        assert_eq!(json["valid"], true);
        assert!(json.get("error").is_none());
        assert_eq!(json["tokens"][1]["kind"], "FLOAT");
    }

    #[test]
    fn json_view_mirrors_outcome() {
        let report = analyze("if x <");
        let view = report.to_json();
        assert!(!view.valid);
        assert_eq!(view.source, "if x <");
        assert_eq!(view.tokens.len(), 3);

        let error = view.error.expect("invalid line carries an error");
        assert_eq!(error.stage, "syntax");
        assert_eq!(error.code, "S0003");
        assert_eq!(error.message, "expected an operand after '<', found end of input");
        assert_eq!(error.span, Span::point(6));
    }
}
