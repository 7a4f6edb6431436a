//! Used to actually print results. Makes use of the [filter](crate::filter) output.

use crate::error::FinderError;
use crate::history::HistoryStore;
use crate::record::CommitRecord;
use std::io::Write;

/// Log entry of every record followed by a blank line, in the order given.
pub fn render_report<S: HistoryStore + ?Sized>(
    store: &S,
    records: &[CommitRecord],
) -> Result<String, FinderError> {
    let mut report = String::new();
    for record in records {
        report.push_str(&store.render_log(record.hash())?);
        report.push('\n');
    }
    Ok(report)
}

/// Renders the full report before writing any of it, so a failing commit never leaves half a
/// report behind.
pub fn write_report<S: HistoryStore + ?Sized, W: Write>(
    store: &S,
    records: &[CommitRecord],
    mut out: W,
) -> Result<(), FinderError> {
    let report = render_report(store, records)?;
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}
