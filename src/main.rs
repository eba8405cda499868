/*
 * ==========================================================================
 * MINIFRONT - One line in, one verdict out.
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Binary entry point: reads a line, runs the front end and
 *            prints the verdict.
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

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use minifront::cli::MinifrontArgs;
use minifront::diagnostics::DiagnosticPrinter;
use minifront::report::{analyze, Report};

const PROMPT: &str = "Enter a statement: ";

fn main() -> anyhow::Result<ExitCode> {
    let args = MinifrontArgs::parse();

    // Initialize logging; RUST_LOG overrides the flag-derived level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut all_valid = true;

    if let Some(line) = &args.line {
        all_valid &= emit(&args, &analyze(line))?;
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let show_prompt = !args.json;

        loop {
            let Some(line) = read_statement(&mut input, show_prompt)? else {
                if all_valid && !args.repl {
                    warn!("no input received");
                }
                break;
            };

            all_valid &= emit(&args, &analyze(&line))?;

            if !args.repl {
                break;
            }
        }
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prompts for and reads one line; `None` at end of input.
fn read_statement(input: &mut impl BufRead, show_prompt: bool) -> anyhow::Result<Option<String>> {
    if show_prompt {
        print!("{PROMPT}");
        io::stdout().flush().context("failed to flush prompt")?;
    }

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read a line from stdin")?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prints the report and returns whether the line was valid.
///
/// Success goes to stdout; errors go to stderr, except in JSON mode where
/// the whole report is a single JSON document on stdout.
fn emit(args: &MinifrontArgs, report: &Report) -> anyhow::Result<bool> {
    if args.json {
        let json = serde_json::to_string_pretty(&report.to_json())
            .context("failed to serialize report")?;
        println!("{json}");
    } else if let Some(err) = report.error() {
        eprintln!("\n{}", report.heading());
        DiagnosticPrinter::new(args.source_name(), report.source.as_str()).print(err);
    } else {
        println!("\n{}", report.heading());
        print!("{}", report.token_listing());
    }

    info!(valid = report.is_valid(), tokens = report.tokens.len(), "line checked");
    Ok(report.is_valid())
}
