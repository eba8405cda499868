/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      cli.rs
 * Purpose:   Command-line arguments of the `minifront` binary.
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

use clap::Parser;

/// Checks one line of the mini-language for lexical and syntactic errors
#[derive(Debug, Parser)]
#[command(name = "minifront", author)]
pub struct MinifrontArgs {
    /// The statement to check; read from stdin when omitted
    #[arg()]
    pub line: Option<String>,

    /// Print the analysis as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Keep reading and checking lines until end of input
    #[arg(long, conflicts_with = "line")]
    pub repl: bool,

    /// Enable verbose logging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Name shown for the input in diagnostics
    #[arg(long)]
    pub source_name: Option<String>,
}

impl MinifrontArgs {
    /// Diagnostic source name: explicit flag, else `<arg>` or `<stdin>`.
    pub fn source_name(&self) -> &str {
        match (&self.source_name, &self.line) {
            (Some(name), _) => name,
            (None, Some(_)) => "<arg>",
            (None, None) => "<stdin>",
        }
    }

    /// Default log level when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_line() {
        let args = MinifrontArgs::parse_from(["minifront", "if x print y"]);
        assert_eq!(args.line.as_deref(), Some("if x print y"));
        assert_eq!(args.source_name(), "<arg>");
        assert!(!args.json);
    }

    #[test]
    fn stdin_defaults() {
        let args = MinifrontArgs::parse_from(["minifront", "--json", "-V"]);
        assert!(args.line.is_none());
        assert_eq!(args.source_name(), "<stdin>");
        assert_eq!(args.default_log_level(), "debug");
    }

    #[test]
    fn explicit_source_name_wins() {
        let args = MinifrontArgs::parse_from(["minifront", "--source-name", "q2", "x"]);
        assert_eq!(args.source_name(), "q2");
    }

    #[test]
    fn repl_rejects_positional_line() {
        assert!(MinifrontArgs::try_parse_from(["minifront", "--repl", "x"]).is_err());
    }
}
