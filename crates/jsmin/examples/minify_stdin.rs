//! Minifies a script read from standard input.
//!
//! ```bash
//! cargo run -p jsmin --example minify_stdin < app.js > app.min.js
//! ```
//!
//! Malformed input (an unterminated comment, string or regex literal) prints
//! the error with its position to stderr and exits with status 1; nothing is
//! written to stdout in that case.

use std::{
    io::{self, Read, Write},
    process::ExitCode,
};

use jsmin::{MinifyOptions, minify_bytes_with};

fn main() -> ExitCode {
    let mut source = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut source) {
        eprintln!("failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    let options = MinifyOptions {
        trim: true,
        ..Default::default()
    };
    let minified = match minify_bytes_with(&source, options) {
        Ok(out) => out,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(&minified).and_then(|()| stdout.write_all(b"\n")) {
        eprintln!("failed to write stdout: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
