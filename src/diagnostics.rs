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

use crate::error::Diagnostic;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for lexical and syntax errors.
///
/// This printer:
/// - Formats errors with source name and column information
/// - Displays the offending line
/// - Underlines the error span with carets (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is modelled on `rustc` diagnostics and stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// The analyzed line.
    source: String,

    /// Display name of where the line came from (e.g. `<stdin>`).
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given line.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders `error` as a multi-line diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[S0001]: 'else' occurs before 'if'
    ///   --> <stdin>:1:1
    ///    |
    ///  1 | else x
    ///    | ^^^^
    /// help: an 'else' branch must follow an 'if' statement
    /// ```
    pub fn render(&self, error: &dyn Diagnostic) -> String {
        let span = error.span();
        let line = self.source.trim_end_matches(['\r', '\n']);

        // Tabs in the echoed line are copied into the padding so the caret
        // stays under the offending column.
        let padding: String = line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(span.start)
            .map(|ch| if ch == '\t' { '\t' } else { ' ' })
            .collect();

        let mut lines = vec![
            format!("error[{}]: {}", error.code(), error),
            format!("  --> {}:1:{}", self.file_name, span.start + 1),
            "   |".to_string(),
            format!("{:>2} | {}", 1, line),
            format!("   | {}{}", padding, "^".repeat(span.len().max(1))),
        ];

        if let Some(help) = error.help() {
            lines.push(format!("help: {}", help));
        }

        lines.push(String::new());
        lines.join("\n")
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &dyn Diagnostic) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexicalError, SyntaxError};
    use crate::span::Span;

    #[test]
    fn renders_syntax_error_with_help() {
        let printer = DiagnosticPrinter::new("<stdin>", "else x");
        let error = SyntaxError::ElseBeforeIf {
            span: Span::new(0, 4),
        };

        assert_eq!(
            printer.render(&error),
            "error[S0001]: 'else' occurs before 'if'\n\
             \x20 --> <stdin>:1:1\n\
             \x20  |\n\
             \x201 | else x\n\
             \x20  | ^^^^\n\
             help: an 'else' branch must follow an 'if' statement\n"
        );
    }

    #[test]
    fn zero_width_span_still_gets_a_caret() {
        let printer = DiagnosticPrinter::new("<arg>", "if");
        let error = SyntaxError::MissingCondition {
            found: None,
            span: Span::point(2),
        };

        let rendered = printer.render(&error);
        assert!(rendered.contains("  --> <arg>:1:3\n"));
        assert!(rendered.contains("   |   ^\n"));
    }

    #[test]
    fn lexical_caret_points_at_character() {
        let printer = DiagnosticPrinter::new("<stdin>", "x = 4 $\n");
        let error = LexicalError::UnrecognizedCharacter {
            character: '$',
            position: 6,
        };

        let rendered = printer.render(&error);
        assert!(rendered.starts_with("error[L0001]: invalid character '$' at position 6\n"));
        assert!(rendered.contains(" 1 | x = 4 $\n"));
        assert!(rendered.contains("   |       ^\n"));
    }

    #[test]
    fn caret_padding_keeps_tabs() {
        let printer = DiagnosticPrinter::new("<stdin>", "\tx $");
        let error = LexicalError::UnrecognizedCharacter {
            character: '$',
            position: 3,
        };

        let rendered = printer.render(&error);
        assert!(rendered.contains(" 1 | \tx $\n"));
        assert!(rendered.contains("   | \t  ^\n"));
    }
}
