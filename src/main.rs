/*
 * Copyright (c) 2026. Mikhail Kulik.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use turtlescript::Diagnostic;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile turtle-graphics programs to Python", long_about = None)]
struct Args {
    /// Path to the turtle program to compile
    #[arg(short, long)]
    input: PathBuf,
    /// Where to write the generated Python. Defaults to the input path with a `.py` extension.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Only check the program for errors; write nothing
    #[arg(long)]
    check: bool,
    /// Dump the token stream to stderr before compiling
    #[arg(long)]
    print_tokens: bool,
    /// Log every compilation stage (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `Ok(false)` means the program had diagnostics, which are already printed.
fn run(args: &Args) -> Result<bool> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    if args.print_tokens {
        print_tokens(&source);
    }

    if args.check {
        let diagnostics = turtlescript::check(&source);
        report(&diagnostics);
        return Ok(diagnostics.is_empty());
    }

    let (code, diagnostics) = turtlescript::compile(&source);
    if !diagnostics.is_empty() {
        report(&diagnostics);
        return Ok(false);
    }

    let output = output_path(&args.input, args.output.as_deref())?;
    fs::write(&output, code).with_context(|| format!("failed to write {}", output.display()))?;
    info!(output = %output.display(), "wrote python program");
    Ok(true)
}

fn output_path(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    if let Some(output) = output {
        return Ok(output.to_path_buf());
    }
    let derived = input.with_extension("py");
    if derived == input {
        bail!(
            "refusing to overwrite {}; pass --output explicitly",
            input.display()
        );
    }
    Ok(derived)
}

/// Lexical errors are left for the compile step to report.
fn print_tokens(source: &str) {
    if let Ok(tokens) = turtlescript::tokenize(source) {
        for token in tokens {
            eprintln!("{:>4}  {:<18} {}", token.line, token.kind.to_string(), token.lexeme);
        }
    }
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic);
    }
}
