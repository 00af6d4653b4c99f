//! Command-line host for `polycrc`.
//!
//! Reads whole files into memory, parses the generator polynomial once, and
//! prints one `0xXXXXXXXX  <path>` line per file. The library half exists so
//! the argument handling and output format can be tested without spawning a
//! process.

#![deny(missing_docs)]

use std::{
  ffi::{OsStr, OsString},
  fmt, fs,
  io::{self, Read, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use polycrc::{Crc32Engine, ParseError, Polynomial, TableCache};
use thiserror::Error;

/// Environment variable consulted when no polynomial is given on the command line.
pub const POLYNOMIAL_ENV: &str = "POLYCRC_POLYNOMIAL";

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "polycrc", version)]
#[command(about = "CRC-32 of files using a generator polynomial written as x^32 + x^26 + ... + 1")]
pub struct Args {
  /// Files to checksum (`-` reads standard input).
  #[arg(required = true, value_name = "FILE")]
  pub files: Vec<PathBuf>,

  /// Generator polynomial in algebraic form, e.g. "x^32 + x^26 + ... + x + 1".
  #[arg(short, long, value_name = "EXPR", conflicts_with = "preset")]
  pub poly: Option<String>,

  /// Well-known polynomial to use instead of --poly.
  #[arg(long, value_enum)]
  pub preset: Option<Preset>,

  /// Print each file's contents (lossy UTF-8) after its checksum.
  #[arg(long)]
  pub show_content: bool,

  /// Diagnostic output on stderr.
  #[arg(short, long)]
  pub verbose: bool,
}

/// Named polynomials selectable with `--preset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
  /// CRC-32 (IEEE 802.3): Ethernet, gzip, zip, PNG.
  Ieee,
  /// CRC-32C (Castagnoli): iSCSI, ext4, Btrfs.
  Castagnoli,
}

impl Preset {
  /// The generator polynomial this preset names.
  #[must_use]
  pub const fn polynomial(self) -> Polynomial {
    match self {
      Self::Ieee => Polynomial::IEEE,
      Self::Castagnoli => Polynomial::CASTAGNOLI,
    }
  }

  /// Name as accepted by `--preset`.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Ieee => "ieee",
      Self::Castagnoli => "castagnoli",
    }
  }
}

/// Where the polynomial came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
  /// `--poly EXPR`.
  Argument,
  /// `--preset NAME`.
  Preset(Preset),
  /// The `POLYCRC_POLYNOMIAL` environment variable.
  Environment,
  /// Nothing given; IEEE is used.
  Default,
}

impl fmt::Display for Source {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Argument => f.write_str("--poly"),
      Self::Preset(preset) => write!(f, "--preset {}", preset.as_str()),
      Self::Environment => f.write_str(POLYNOMIAL_ENV),
      Self::Default => f.write_str("default (ieee)"),
    }
  }
}

/// Outcome of a run, mapped to the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
  /// Every file was checksummed.
  Success,
  /// At least one file could not be read.
  ReadFailure,
  /// The polynomial was rejected; nothing was checksummed.
  BadPolynomial,
}

impl Status {
  /// Process exit code: 0, 1 or 2.
  #[must_use]
  pub const fn code(self) -> u8 {
    match self {
      Self::Success => 0,
      Self::ReadFailure => 1,
      Self::BadPolynomial => 2,
    }
  }
}

/// Why no polynomial could be selected.
#[derive(Debug, Error)]
pub enum PolynomialError {
  /// The selected text did not parse.
  #[error(transparent)]
  Parse(#[from] ParseError),
  /// The environment override is set but is not valid UTF-8.
  #[error("POLYCRC_POLYNOMIAL is not valid UTF-8")]
  NotUnicode,
}

/// Read the raw polynomial override from the environment.
///
/// The value is returned as is; [`resolve_polynomial`] decides what it means.
#[must_use]
pub fn env_polynomial() -> Option<OsString> {
  std::env::var_os(POLYNOMIAL_ENV)
}

/// Interpret the environment override. Unset and blank count as "no
/// override"; anything else is trimmed.
fn env_override(value: Option<&OsStr>) -> Result<Option<&str>, PolynomialError> {
  let Some(value) = value else {
    return Ok(None);
  };
  let value = value.to_str().ok_or(PolynomialError::NotUnicode)?.trim();
  Ok((!value.is_empty()).then_some(value))
}

/// Pick and parse the polynomial: `--poly`, `--preset`, environment, IEEE.
///
/// # Errors
///
/// Returns the parse error of whichever text source was selected, or
/// [`PolynomialError::NotUnicode`] if the environment override would have
/// been consulted and is not valid UTF-8.
pub fn resolve_polynomial(args: &Args, env: Option<&OsStr>) -> Result<(Polynomial, Source), PolynomialError> {
  if let Some(text) = &args.poly {
    return Ok((Polynomial::parse(text)?, Source::Argument));
  }
  if let Some(preset) = args.preset {
    return Ok((preset.polynomial(), Source::Preset(preset)));
  }
  if let Some(text) = env_override(env)? {
    return Ok((Polynomial::parse(text)?, Source::Environment));
  }
  Ok((Polynomial::IEEE, Source::Default))
}

/// `0x` followed by eight uppercase hex digits.
#[must_use]
pub fn format_checksum(crc: u32) -> String {
  format!("0x{crc:08X}")
}

/// Read a whole file, or standard input for `-`.
///
/// # Errors
///
/// Fails with the path in the error context if the input cannot be read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
  if path == Path::new("-") {
    let mut data = Vec::new();
    io::stdin()
      .lock()
      .read_to_end(&mut data)
      .context("failed to read standard input")?;
    return Ok(data);
  }
  fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Run the checksum command.
///
/// Results go to `out`; diagnostics and per-file errors go to `log`.
///
/// # Errors
///
/// Only fails if writing to `out` or `log` fails. Unreadable inputs and bad
/// polynomials are reported through [`Status`].
pub fn run<W: Write, L: Write>(args: &Args, env: Option<&OsStr>, out: &mut W, log: &mut L) -> Result<Status> {
  let (poly, source) = match resolve_polynomial(args, env) {
    Ok(resolved) => resolved,
    Err(err) => {
      writeln!(log, "error: could not parse polynomial: {err}")?;
      return Ok(Status::BadPolynomial);
    }
  };

  if args.verbose {
    writeln!(log, "polycrc: polynomial from {source}: {poly}")?;
    writeln!(
      log,
      "polycrc: normal={:#010X} reflected={:#010X}",
      poly.normal(),
      poly.reflected()
    )?;
  }

  let engine = Crc32Engine::from_table(*TableCache::global().get_or_build(poly.reflected()));
  let mut status = Status::Success;

  for path in &args.files {
    let data = match read_input(path) {
      Ok(data) => data,
      Err(err) => {
        writeln!(log, "error: {err:#}")?;
        status = Status::ReadFailure;
        continue;
      }
    };

    if args.verbose {
      writeln!(log, "polycrc: {}: {} bytes", path.display(), data.len())?;
    }

    writeln!(out, "{}  {}", format_checksum(engine.checksum(&data)), path.display())?;
    if args.show_content {
      writeln!(out, "{}", String::from_utf8_lossy(&data))?;
    }
  }

  if args.verbose {
    writeln!(log, "polycrc: {} table(s) cached", TableCache::global().len())?;
  }

  Ok(status)
}
