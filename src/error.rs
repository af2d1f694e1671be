use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    /// Wrong number of book lists on the command line.
    #[error("{0}")]
    Usage(String),

    /// Every abbreviation not found in the book table, in argument order.
    #[error("Unrecognized book abbreviations: {}", .0.join(", "))]
    UnknownBooks(Vec<String>),

    #[error("File '{0}' not found.")]
    CorpusNotFound(String),

    /// Corpus file without even a header line.
    #[error("corpus file '{0}' is empty, expected a header line")]
    MissingHeader(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Writing the report failed, e.g. stdout closed by the reader of a pipe.
    #[error("{0}")]
    Output(#[source] std::io::Error),
}

impl VocabError {
    /// Second line printed under the error, pointing the user at the fix.
    pub fn hint(&self) -> Option<String> {
        match self {
            VocabError::UnknownBooks(_) => Some("Valid abbreviations include: GEN, EXO, MAT, MRK, ROM, etc.".to_string()),
            VocabError::CorpusNotFound(filename) => Some(format!("Make sure '{}' is in the current directory.", filename)),
            _ => None,
        }
    }

    /// The user-facing message, formatted the way the report prints errors.
    pub fn message(&self) -> String {
        match self {
            VocabError::Usage(usage) => usage.clone(),
            VocabError::UnknownBooks(_) | VocabError::CorpusNotFound(_) => format!("Error: {}", self),
            VocabError::MissingHeader(_) | VocabError::Io(_) => format!("Error reading file: {}", self),
            VocabError::Output(_) => format!("Error writing output: {}", self),
        }
    }
}
