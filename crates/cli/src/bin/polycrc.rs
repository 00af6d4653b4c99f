//! CRC-32 of files with a user-specified generator polynomial.
//!
//! Usage:
//!   polycrc FILE...
//!   polycrc --poly "x^32 + x^26 + x^23 + x^22 + x^16 + x^12 + x^11 + x^10 + x^8 + x^7 + x^5 + x^4 + x^2 + x + 1" FILE
//!   POLYCRC_POLYNOMIAL="x^32 + x^3 + 1" polycrc FILE
//!   cat FILE | polycrc --preset castagnoli -

use std::{io, process::ExitCode};

use clap::Parser;
use polycrc_cli::{Args, env_polynomial, run};

fn main() -> ExitCode {
  let args = Args::parse();
  let env = env_polynomial();

  match run(&args, env.as_deref(), &mut io::stdout().lock(), &mut io::stderr().lock()) {
    Ok(status) => ExitCode::from(status.code()),
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}
