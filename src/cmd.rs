use crate::args::{Config, OutputFormat};
use crate::corpus;
use crate::error::VocabError;
use crate::output::{self, text};
use crate::report::VocabReport;
use crate::resolve;
use std::io::Write;

// Banner and progress lines are only written for text output.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<(), VocabError> {
    let text_output = config.output_format == OutputFormat::Text;
    if text_output {
        text::write_banner(writer).map_err(VocabError::Output)?;
    }
    let (first, second) = resolve::resolve_groups(&config.first_books, &config.second_books)?;
    if text_output {
        text::write_groups(writer, &first, &second).map_err(VocabError::Output)?;
        text::write_loading(writer, "first").map_err(VocabError::Output)?;
    }
    // Each pass opens its own handle on the corpus
    let (first_vocab, second_vocab) = rayon::join(
        || corpus::load_vocabulary(&config.corpus_file, &first.prefixes),
        || corpus::load_vocabulary(&config.corpus_file, &second.prefixes),
    );
    let first_vocab = first_vocab?;
    if text_output {
        text::write_loading(writer, "second").map_err(VocabError::Output)?;
    }
    let second_vocab = second_vocab?;
    let report = VocabReport::new(&first, &second, &first_vocab, &second_vocab);
    output::output_report(config, writer, &report).map_err(VocabError::Output)?;
    Ok(())
}
