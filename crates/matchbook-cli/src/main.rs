//! Command-line driver for the matchbook engine.
//!
//! Reads operations from stdin — either an operation-count line followed by
//! that many operation lines, or simply one operation per line until EOF —
//! and writes the report to the file named by `OUTPUT_PATH`, or stdout when
//! the variable is unset.
//!
//! ```bash
//! printf '2\nINSERT,1,FFLY,BUY,23.45,12\nINSERT,2,FFLY,SELL,23.45,10\n' | matchbook
//! ```

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use matchbook_engine::run;
use tracing::debug;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut lines = input.lines().map(str::trim_end);

    // Legacy stream format: a leading count line sizes the batch. Anything
    // else is treated as the first operation.
    let mut operations: Vec<&str> = Vec::new();
    if let Some(first) = lines.next() {
        match first.trim().parse::<usize>() {
            Ok(count) => {
                debug!(count, "count-prefixed input");
                operations.extend(lines.take(count));
            }
            Err(_) => {
                operations.push(first);
                operations.extend(lines);
            }
        }
    }

    let output = run(operations);

    match env::var_os("OUTPUT_PATH") {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_lines(&mut writer, &output)?;
            writer.flush()
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_lines(&mut writer, &output)?;
            writer.flush()
        }
    }
}

fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
