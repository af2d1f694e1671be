use crate::report::VocabReport;
use std::io::{self, Write};

// One word per line under a single header column, for piping into other tools.
pub fn output_report(writer: &mut dyn Write, report: &VocabReport) -> io::Result<()> {
    writeln!(writer, "word")?;
    for word in &report.unique_words {
        writeln!(writer, "{}", word)?;
    }
    Ok(())
}
