use crate::report::VocabReport;
use crate::resolve::BookGroup;
use std::io::{self, Write};

const WORDS_PER_LINE: usize = 6;
const COLUMN_WIDTH: usize = 10;

pub fn write_banner(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "Bible Vocabulary Finder")?;
    writeln!(writer, "{}", "=".repeat(50))
}

pub fn write_groups(writer: &mut dyn Write, first: &BookGroup, second: &BookGroup) -> io::Result<()> {
    writeln!(writer, "First set of books: {}", first.label())?;
    writeln!(writer, "Second set of books: {}", second.label())?;
    writeln!(writer)
}

pub fn write_loading(writer: &mut dyn Write, set_name: &str) -> io::Result<()> {
    writeln!(writer, "Loading vocabulary from {} set...", set_name)?;
    writer.flush()
}

pub fn output_report(writer: &mut dyn Write, report: &VocabReport) -> io::Result<()> {
    output_statistics(writer, report)?;
    if report.unique_words.is_empty() {
        writeln!(writer, "\nNo unique vocabulary found in {}.", report.second_books)?;
        writeln!(writer, "All words in the second set also appear in the first set.")?;
        return Ok(());
    }
    writeln!(writer, "\nUnique vocabulary found in {}:", report.second_books)?;
    writeln!(writer, "{}", "-".repeat(40))?;
    output_columns(writer, &report.unique_words)?;
    writeln!(writer, "\nTotal unique words: {}", report.unique_count)
}

fn output_statistics(writer: &mut dyn Write, report: &VocabReport) -> io::Result<()> {
    writeln!(writer, "\nVocabulary Statistics:")?;
    writeln!(writer, "Words in first set: {}", report.first_count)?;
    writeln!(writer, "Words in second set: {}", report.second_count)?;
    writeln!(writer, "Unique words in second set: {}", report.unique_count)
}

// Padding counts characters, not display width, so wide CJK glyphs
// do not line up perfectly. Longer words run into the next column.
fn output_columns(writer: &mut dyn Write, words: &[String]) -> io::Result<()> {
    for line in words.chunks(WORDS_PER_LINE) {
        for word in line {
            write!(writer, "{:<width$}", word, width = COLUMN_WIDTH)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
