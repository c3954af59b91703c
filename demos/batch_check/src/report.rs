//! Plain-text report of an accepted batch.

use std::io::{self, Write};

use crate::check::Endpoint;

/// Write one line per accepted endpoint to stdout.
///
/// # Errors
///
/// Propagates any I/O error from stdout.
pub fn print_report(endpoints: &[Endpoint]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_report_to(&mut stdout, endpoints)
}

/// Write the report for `endpoints` to `out`.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_report_to<W: Write>(out: &mut W, endpoints: &[Endpoint]) -> io::Result<()> {
    writeln!(out, "accepted {} endpoint(s)", endpoints.len())?;
    for endpoint in endpoints {
        writeln!(out, "  {}:{}", endpoint.name, endpoint.port)?;
    }
    Ok(())
}
