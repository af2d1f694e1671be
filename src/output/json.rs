use crate::report::VocabReport;
use std::io::{self, Write};

/// Writes the report as a single pretty-printed JSON object.
///
/// Field names follow `VocabReport`: `first_books`, `second_books`,
/// `first_count`, `second_count`, `unique_count` and `unique_words`.
pub fn output_report(writer: &mut dyn Write, report: &VocabReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}
