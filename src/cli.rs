// src/cli.rs
// =============================================================================
// This file defines our command-line interface.
//
// The interface is deliberately tiny: exactly one positional argument, the
// GitHub link to translate. We count the raw argument vector ourselves, so
// nothing is special: "--", "--help" and "-x" are all just one argument
// that goes to the translator. Anything other than one argument gets the
// usage text and exit code 1.
//
// Exit codes:
//   0 = translated URL printed to stdout
//   1 = wrong number of arguments (usage on stdout), or the link had the
//       wrong shape ("Error: ..." on stderr)
//
// Rust concepts:
// - OsString: Arguments aren't guaranteed to be UTF-8, so we start from the OS form
// - Generics: run_with_args works with any writer, so tests can capture output
// - impl Write: Abstracts over stdout, stderr and in-memory buffers
// =============================================================================

use std::ffi::OsString;
use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::error::TranslateError;
use crate::github;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

const PROGRAM_NAME: &str = "ghlink2raw";
const EXAMPLE_URL: &str = "https://github.com/hyperipper/hyperipper_posts/blob/main/image.png";

/// The usage block printed when the argument count is wrong.
pub fn usage() -> String {
    format!(
        "Usage: {prog} <github-url>\n\nExample:\n  {prog} {url}\n",
        prog = PROGRAM_NAME,
        url = EXAMPLE_URL
    )
}

// Runs the CLI against explicit arguments and output streams
//
// Parameters:
//   args: full argument vector, program name first (like std::env::args_os())
//   stdout, stderr: where to write results and errors
//
// Returns: the process exit code
//   Err is only returned if writing to a stream fails
pub fn run_with_args<I, T, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // Program name plus exactly one URL
    if args.len() != 2 {
        debug!(count = args.len().saturating_sub(1), "wrong number of arguments");
        write!(stdout, "{}", usage())?;
        stdout.flush()?;
        return Ok(EXIT_FAILURE);
    }

    let github_url = args.swap_remove(1);

    match translate_arg(github_url) {
        Ok(raw_url) => {
            writeln!(stdout, "{}", raw_url)?;
            stdout.flush()?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            writeln!(stderr, "Error: {}", e)?;
            stderr.flush()?;
            Ok(EXIT_FAILURE)
        }
    }
}

// A link that isn't valid UTF-8 can't have the shape we need
fn translate_arg(github_url: OsString) -> Result<String, TranslateError> {
    let github_url = github_url.into_string().map_err(|raw| {
        debug!(input = ?raw, "argument is not valid UTF-8");
        TranslateError::InvalidFormat
    })?;
    github::github_url_to_raw(&github_url)
}
