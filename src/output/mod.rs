pub mod json;
pub mod text;
pub mod tsv;

use crate::args::{Config, OutputFormat};
use crate::report::VocabReport;
use std::io::{self, Write};

pub fn output_report(config: &Config, writer: &mut dyn Write, report: &VocabReport) -> io::Result<()> {
    match config.output_format {
        OutputFormat::Text => text::output_report(writer, report),
        OutputFormat::Json => json::output_report(writer, report),
        OutputFormat::Tsv => tsv::output_report(writer, report),
    }?;
    writer.flush()
}
