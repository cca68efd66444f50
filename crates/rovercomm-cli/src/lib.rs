//! Command-line front end for the rover communication cipher.
//!
//! The binary passes strings to [`CipherEngine`] and prints the results; it holds no
//! cipher logic of its own.
//!
//! ```sh
//! rovercomm --key MARS2025 grid
//! rovercomm --key MARS2025 encode "Rover at 5N"
//! echo PA5ZSRENL | rovercomm --key MARS2025 decode
//! ```

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rovercomm_cipher::{CipherEngine, ConfigurationError, Direction, RuleStats};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Mission key used to build the cipher grid.
    #[arg(short, long, value_name = "KEY")]
    pub key: String,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the 6x6 grid derived from the key.
    Grid,
    /// Print messages projected onto the cipher alphabet.
    Prepare(MessageArgs),
    /// Encode messages.
    Encode(TransformArgs),
    /// Decode messages.
    Decode(TransformArgs),
}

/// Message input shared by all message commands.
#[derive(Debug, Clone, clap::Args)]
pub struct MessageArgs {
    /// Messages to process. Reads one message per line from stdin when omitted.
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,
}

/// Arguments of `encode` and `decode`.
#[derive(Debug, Clone, clap::Args)]
pub struct TransformArgs {
    #[command(flatten)]
    #[expect(missing_docs)]
    pub input: MessageArgs,

    /// Print how often each substitution rule was applied to stderr.
    #[arg(long)]
    pub stats: bool,
}

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The mission key did not produce a valid grid.
    #[display("invalid grid configuration: {_0}")]
    Configuration(ConfigurationError),
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),
}

/// Runs a command, reading messages from `input` when none are given.
///
/// # Errors
///
/// Returns [`CliError`] if the engine cannot be built or I/O fails.
pub fn run(
    args: &Args,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let engine = CipherEngine::new(&args.key)?;
    log::info!(
        "mission key projects to {} symbols",
        engine.mission_key().symbols().len()
    );

    match &args.command {
        Command::Grid => writeln!(out, "{}", engine.grid())?,
        Command::Prepare(message_args) => {
            for message in messages(message_args, input)? {
                writeln!(out, "{}", engine.prepare_message(&message))?;
            }
        }
        Command::Encode(transform_args) => {
            transform(&engine, Direction::Encode, transform_args, input, out, err)?;
        }
        Command::Decode(transform_args) => {
            transform(&engine, Direction::Decode, transform_args, input, out, err)?;
        }
    }
    Ok(())
}

fn transform(
    engine: &CipherEngine,
    direction: Direction,
    args: &TransformArgs,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let mut stats = RuleStats::new();
    for message in messages(&args.input, input)? {
        writeln!(
            out,
            "{}",
            engine.transform_with_stats(&message, direction, &mut stats)
        )?;
    }

    if args.stats {
        writeln!(err, "Stats:")?;
        for (rule, count) in stats.iter() {
            writeln!(err, "  {rule}: {count}")?;
        }
        writeln!(err, "  total: {}", stats.total_groups())?;
    }
    Ok(())
}

fn messages(args: &MessageArgs, input: impl BufRead) -> io::Result<Vec<String>> {
    if !args.messages.is_empty() {
        return Ok(args.messages.clone());
    }
    log::debug!("reading messages from stdin");
    input.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(argv: &[&str], stdin: &str) -> (String, String) {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&args, stdin.as_bytes(), &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_grid_command() {
        let (out, _) = run_str(&["rovercomm", "--key", "MARS2025", "grid"], "");
        assert_eq!(out.lines().next(), Some("M A R S 2 0"));
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_encode_arguments() {
        let (out, err) = run_str(
            &["rovercomm", "-k", "MARS2025", "encode", "Rover at 5N", "ab"],
            "",
        );
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "PA5ZSRENL");
        assert_eq!(lines.len(), 2);
        assert!(err.is_empty());
    }

    #[test]
    fn test_decode_reads_stdin() {
        let (out, _) = run_str(
            &["rovercomm", "--key", "MARS2025", "decode"],
            "PA5ZSRENL\n",
        );
        assert_eq!(out, "ROVERAT5N\n");
    }

    #[test]
    fn test_prepare_command() {
        let (out, _) = run_str(
            &["rovercomm", "--key", "x", "prepare", "hello, world"],
            "",
        );
        assert_eq!(out, "HELLOWORLD\n");
    }

    #[test]
    fn test_stats_go_to_stderr() {
        let (out, err) = run_str(
            &["rovercomm", "--key", "MARS2025", "encode", "--stats", "Rover at 5N"],
            "",
        );
        assert_eq!(out, "PA5ZSRENL\n");
        assert!(err.contains("rectangle: 3"));
        assert!(err.contains("total: 5"));
    }

    #[test]
    fn test_key_is_required() {
        assert!(Args::try_parse_from(["rovercomm", "grid"]).is_err());
    }
}
