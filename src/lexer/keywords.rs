/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines the reserved keywords of the MINIFRONT language.
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

/// Opens a conditional statement.
pub const IF: &str = "if";

/// Opens the optional alternative branch of a conditional.
pub const ELSE: &str = "else";

/// Output statement keyword. Structurally it is an ordinary statement token.
pub const PRINT: &str = "print";

/// Determines whether a complete word is a **reserved keyword**.
///
/// The lexer calls this only after it has consumed a maximal
/// `[A-Za-z_][A-Za-z0-9_]*` run, which gives keywords word-boundary
/// semantics: `ifx` is an identifier, never `if` followed by `x`.
///
/// # Examples
/// ```text
/// if      -> keyword
/// print   -> keyword
/// iff     -> identifier
/// Print   -> identifier (case-sensitive)
/// ```
pub fn is_keyword(word: &str) -> bool {
    matches!(word, IF | ELSE | PRINT)
}

/// Returns `true` for the keywords that give a line its structure.
///
/// `print` is reserved but is absorbed by simple statements like any other
/// token, so it is not structural.
pub fn is_structural(word: &str) -> bool {
    matches!(word, IF | ELSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words() {
        assert!(is_keyword("if"));
        assert!(is_keyword("else"));
        assert!(is_keyword("print"));
        assert!(!is_keyword("iff"));
        assert!(!is_keyword("If"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn print_is_not_structural() {
        assert!(is_structural("if"));
        assert!(is_structural("else"));
        assert!(!is_structural("print"));
    }
}
