//! Argument processing.
//!
//! Turns a raw argument vector into either a help/version message or a
//! resolved [`GenerateRequest`], and reports the result as a process exit
//! code. Output and error streams are passed in so callers (and tests) decide
//! where text goes.

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;
use log::debug;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::exit_code::ExitCode;
use crate::request::GenerateRequest;
use crate::version::version_name;

/// Prefix for every line written to the error log.
pub const LOG_PREFIX: &str = "tc-client-generator: ";

/// What an argument vector asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Generate(GenerateRequest),
}

/// Parses `args` and resolves the generation request.
///
/// `env` looks up environment variables; only the root URL fallback uses it.
///
/// # Panics
///
/// Panics if `args` is empty. The program name is always present in a real
/// argument vector, so an empty one indicates a bug in the caller.
pub fn resolve<I, T, F>(args: I, env: F) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: Fn(&str) -> Option<String>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.is_empty() {
        panic!(
            "Somehow the command arguments have been lost - this should not be possible and indicates a bug."
        );
    }

    debug!("Processing {} arguments", args.len() - 1);

    if args.len() == 2 {
        match args[1].to_str() {
            Some("--help") | Some("-h") => return Ok(Invocation::Help),
            Some("--version") => return Ok(Invocation::Version),
            _ => {}
        }
    }

    check_option_positions(&args[1..])?;

    let cli = Cli::try_parse_from(&args)?;
    let request = GenerateRequest::from_cli(cli, env)?;

    debug!("Resolved request: {:?}", request);

    Ok(Invocation::Generate(request))
}

/// Walks the arguments in option/value pairs and rejects any token in option
/// position that is not an exact option name. This keeps `--opt=value` and
/// `--` out of the accepted grammar. A missing trailing value is left for
/// clap to report.
fn check_option_positions(args: &[OsString]) -> Result<()> {
    for pair in args.chunks(2) {
        let token = &pair[0];
        if !token.to_str().is_some_and(Cli::is_option) {
            return Err(CliError::InvalidArguments(format!(
                "Unrecognised option: {}",
                token.to_string_lossy()
            )));
        }
    }
    Ok(())
}

/// Runs argument processing against the process environment.
///
/// Writes usage, version or the request summary to `out`, and errors to
/// `errlog`. Returns the process exit code.
pub fn process<I, T>(args: I, out: &mut impl Write, errlog: &mut impl Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    process_with_env(args, out, errlog, |name| std::env::var(name).ok())
}

/// Same as [`process`], with environment lookups going through `env`.
pub fn process_with_env<I, T, F>(
    args: I,
    out: &mut impl Write,
    errlog: &mut impl Write,
    env: F,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: Fn(&str) -> Option<String>,
{
    let exit_code = match run(args, out, env) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            for line in err.to_string().lines() {
                // Nothing sensible is left to report to if the error log fails
                let _ = writeln!(errlog, "{}{}", LOG_PREFIX, line);
            }
            err.exit_code()
        }
    };

    if !exit_code.is_success() {
        let _ = writeln!(
            errlog,
            "{}Exiting with code {}",
            LOG_PREFIX,
            exit_code.code()
        );
    }

    exit_code.into()
}

fn run<I, T, F>(args: I, out: &mut impl Write, env: F) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: Fn(&str) -> Option<String>,
{
    match resolve(args, env)? {
        Invocation::Help => writeln!(out, "{}", Cli::usage())?,
        Invocation::Version => writeln!(out, "{}", version_name())?,
        Invocation::Generate(request) => writeln!(out, "{}", request)?,
    }
    out.flush().map_err(CliError::from)
}
