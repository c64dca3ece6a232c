//! Command line surface.
//!
//! ```text
//! bitdither [-i <input path>] [-o <output path>] [-b <bits>]
//! ```
//!
//! Only the exact tokens `-i`, `-o` and `-b` are options, and each takes
//! the next token as its value verbatim, even one starting with `-`. Any
//! other token (long forms, attached values like `-b3`, `--`, `--help`,
//! stray positionals) is not an error: it prints the usage text and the
//! process exits successfully. A bad `-b` value or a trailing flag without
//! its argument is a configuration error and exits with clap's usage status.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use depth_dither::BitDepth;

use crate::models::{DitherConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "bitdither")]
#[command(about = "Reduce PNG bit depth with Floyd-Steinberg error diffusion (.png files only)")]
#[command(args_override_self = true)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Input PNG file
    #[arg(short = 'i', value_name = "input path", default_value = DEFAULT_INPUT, allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Output PNG file (written as 8-bit RGBA)
    #[arg(short = 'o', value_name = "output path", default_value = DEFAULT_OUTPUT, allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Number of bits per channel of the output, range [1,7]
    #[arg(short = 'b', value_name = "bits", default_value_t = BitDepth::DEFAULT, allow_hyphen_values = true)]
    pub bits: BitDepth,
}

impl Cli {
    pub fn into_config(self) -> DitherConfig {
        DitherConfig::new(self.input, self.output, self.bits)
    }
}

/// What the binary should do after looking at its arguments.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Arguments were valid: run with this configuration.
    Run(DitherConfig),
    /// An unrecognized token was seen: print [`usage`] and exit 0.
    Usage,
    /// A configuration error. `clap::Error::exit` prints it to stderr with
    /// the usage-error status.
    Clap(clap::Error),
}

/// The only tokens recognized as options.
const OPTIONS: [&str; 3] = ["-i", "-o", "-b"];

/// First token that is neither an option nor an option's value.
fn unrecognized_token(args: &[OsString]) -> Option<&OsString> {
    let mut tokens = args.iter().skip(1);
    while let Some(token) = tokens.next() {
        if !OPTIONS.iter().any(|option| token.as_os_str() == *option) {
            return Some(token);
        }
        tokens.next();
    }
    None
}

/// Classify a full argument list (program name first).
pub fn parse_args<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if let Some(token) = unrecognized_token(&args) {
        tracing::debug!(token = ?token, "Unrecognized argument");
        return ParseOutcome::Usage;
    }

    match Cli::try_parse_from(args) {
        Ok(cli) => ParseOutcome::Run(cli.into_config()),
        Err(err) => ParseOutcome::Clap(err),
    }
}

/// The usage summary printed for unrecognized arguments.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
