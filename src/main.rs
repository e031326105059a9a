// SPDX-License-Identifier: MIT
//
// n-prompt — interactive prompts for shell scripts.
//
// This is the binary that wires the crates together:
//
//   n-term    → raw-mode key reads, ANSI output, display width
//   n-widgets → select, multi-select and line-input prompts
//
// Each subcommand runs one prompt. The prompt draws on stderr and the
// answer goes to stdout, so scripts can capture it with $(...):
//
//   profile=$(n-prompt select 'fast[quick]|slow[exact]' 'Profile' slow)
//
// When stdin is not a terminal nothing is drawn and each prompt returns its
// fallback, which keeps scripts usable from CI and pipes.
//
// Exit status: 0 with the answer on stdout, 1 when the user aborts (the
// prompt has already printed `Aborted.`) or on a terminal failure, 2 on a
// usage error.

mod config;
mod logging;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use n_term::input::KeySource;
use n_term::terminal::{self, TtyKeys};
use n_widgets::{PromptError, Prompter, parse_choices, split_values};

use crate::config::Config;
use crate::logging::Logging;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "n-prompt", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Append debug logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pick one option and print its value
    Select {
        /// Options as `value[description]`, separated by `|`
        options: String,
        /// Question shown before the list
        #[arg(default_value = "Select")]
        prompt: String,
        /// Value highlighted first, and the answer when stdin isn't a terminal
        default: Option<String>,
    },

    /// Check any number of options and print each value on its own line
    SelectMulti {
        /// Options as `value[description]`, separated by `|`
        options: String,
        /// Question shown before the list
        #[arg(default_value = "Select")]
        prompt: String,
        /// Values checked first, separated by `|`
        defaults: Option<String>,
    },

    /// Read a line of text and print it
    Input {
        /// Question shown before the text
        #[arg(default_value = "Input")]
        prompt: String,
        /// Pre-filled text, and the answer for an empty line
        default: Option<String>,
    },
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

/// Run `command` on `prompter` and print the answer to `out`.
fn dispatch<K, W>(prompter: &mut Prompter<K, W>, command: Command, out: &mut impl Write) -> Result<()>
where
    K: KeySource,
    W: Write,
{
    match command {
        Command::Select {
            options,
            prompt,
            default,
        } => {
            let choices = parse_choices(&options);
            let value = prompter.select(&choices, &prompt, default.as_deref().unwrap_or(""))?;
            writeln!(out, "{value}").context("writing answer")?;
        }
        Command::SelectMulti {
            options,
            prompt,
            defaults,
        } => {
            let choices = parse_choices(&options);
            let defaults = split_values(defaults.as_deref().unwrap_or(""));
            for value in prompter.select_multi(&choices, &prompt, &defaults)? {
                writeln!(out, "{value}").context("writing answer")?;
            }
        }
        Command::Input { prompt, default } => {
            let text = prompter.input(&prompt, default.as_deref().unwrap_or(""))?;
            writeln!(out, "{text}").context("writing answer")?;
        }
    }
    out.flush().context("writing answer")
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = Logging::new();
    if let Some(path) = cli.log_file {
        logging = logging.with_file(path);
    }
    logging.start()?;
    terminal::install_panic_hook();

    let config = Config::from_env();
    let mut prompter = Prompter::new(
        TtyKeys,
        BufWriter::new(io::stderr()),
        config.palette(),
        config.interactive,
    );
    dispatch(&mut prompter, cli.command, &mut io::stdout().lock())
}

fn is_aborted(err: &anyhow::Error) -> bool {
    err.downcast_ref::<PromptError>()
        .is_some_and(PromptError::is_aborted)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_aborted(&e) => ExitCode::FAILURE,
        Err(e) => {
            log::debug!("failed: {e:?}");
            eprintln!("n-prompt: {e:#}");
            ExitCode::FAILURE
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
