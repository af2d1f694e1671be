use clap::error::ErrorKind;
use clap::Parser;
use crate::corpus::CORPUS_FILE;
use crate::error::VocabError;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

const BIN_NAME: &str = "vocabfind";

/// Lists the words that occur in the second set of books but never in the first.
#[derive(Parser)]
#[clap(name = BIN_NAME, version)]
struct Args {
    /// First set of books, space separated USFM abbreviations (e.g. "MAT MRK LUK ACT ROM")
    first: String,
    /// Second set of books, the set whose new vocabulary is listed (e.g. "GAL PHP")
    second: String,
    /// Output format. Available formats: 'text', 'json', 'tsv'
    /// [Defaults to 'text']
    #[clap(short = 'F', long = "output-format")]
    output_format: Option<String>,
    /// Print progress and row statistics to stderr
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug)]
pub struct Config {
    pub first_books: String,
    pub second_books: String,
    pub corpus_file: PathBuf,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

impl From<String> for OutputFormat {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            "tsv" => OutputFormat::Tsv,
            _ => OutputFormat::Text,
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Tsv => write!(f, "tsv"),
        }
    }
}

pub fn usage() -> String {
    format!(
        "Usage: {0} \"BOOK1 BOOK2 ...\" \"BOOK3 BOOK4 ...\"\nExample: {0} \"MAT MRK LUK ACT ROM\" \"GAL PHP\"",
        BIN_NAME
    )
}

impl Config {
    pub fn new() -> Result<Config, VocabError> {
        Config::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> Result<Config, VocabError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Args::try_parse_from(args) {
            Ok(args) => parse_config(args),
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                // Missing or surplus book lists, or anything else clap rejects
                _ => Err(VocabError::Usage(usage())),
            },
        }
    }
}

fn parse_config(args: Args) -> Result<Config, VocabError> {
    // A blank list counts as a missing argument
    if args.first.trim().is_empty() || args.second.trim().is_empty() {
        return Err(VocabError::Usage(usage()));
    }
    let output_format = args.output_format.unwrap_or("text".to_string()).into();
    Ok(Config {
        first_books: args.first,
        second_books: args.second,
        corpus_file: PathBuf::from(CORPUS_FILE),
        output_format,
        verbose: args.verbose,
    })
}
