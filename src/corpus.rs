use crate::error::VocabError;
use crate::vocab::Vocabulary;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

pub const CORPUS_FILE: &str = "token_OCCB-simplified.tsv";

// Rows with fewer fields are corpus noise and are skipped silently
const MIN_FIELDS: usize = 8;

const ID_FIELD: usize = 0;
const TEXT_FIELD: usize = 2;
const EXCLUDE_FIELD: usize = 4;

// Full-width CJK punctuation plus the ASCII double quote.
// A token is dropped only when it is exactly one of these characters.
pub const PUNCTUATION: [char; 13] = [
    '，', '。', '；', '：', '？', '！', '"', '（', '）', '【', '】', '《', '》',
];

/// One data row of the token TSV, borrowing from the line it was parsed from.
#[derive(Debug, PartialEq)]
pub struct CorpusRecord<'a> {
    pub id: &'a str,
    pub text: &'a str,
    pub exclude: &'a str,
}

impl<'a> CorpusRecord<'a> {
    /// Returns None for short rows. The whole line is trimmed before
    /// splitting, so trailing empty fields do not count.
    pub fn parse(line: &'a str) -> Option<CorpusRecord<'a>> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() < MIN_FIELDS {
            return None;
        }
        Some(CorpusRecord {
            id: fields[ID_FIELD],
            text: fields[TEXT_FIELD],
            exclude: fields.get(EXCLUDE_FIELD).copied().unwrap_or(""),
        })
    }

    /// First two characters of the id, the zero-padded book number.
    pub fn book_prefix(&self) -> Option<&'a str> {
        self.id.get(..2)
    }

    pub fn is_excluded(&self) -> bool {
        self.exclude.trim().eq_ignore_ascii_case("y")
    }

    /// The trimmed token text if it counts as vocabulary.
    pub fn word(&self) -> Option<&'a str> {
        let word = self.text.trim();
        if word.is_empty() || is_punctuation(word) {
            return None;
        }
        Some(word)
    }
}

pub fn is_punctuation(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PUNCTUATION.contains(&c),
        _ => false,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LoadStats {
    pub lines: usize,
    pub short: usize,
    pub kept: usize,
}

/// Scans the corpus once and collects the vocabulary of the books with the
/// given prefixes. The file is closed again before returning.
pub fn load_vocabulary(path: &Path, prefixes: &[&str]) -> Result<Vocabulary, VocabError> {
    let filename = path.display().to_string();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VocabError::CorpusNotFound(filename.clone()),
        _ => VocabError::Io(e),
    })?;
    let (vocabulary, stats) = read_vocabulary(BufReader::new(file), prefixes, &filename)?;
    info!(
        "Scanned {} rows of {} for {:?}: {} tokens kept, {} short rows skipped, {} distinct words",
        stats.lines, filename, prefixes, stats.kept, stats.short, vocabulary.len()
    );
    if vocabulary.is_empty() {
        warn!("No vocabulary found in {} for book prefixes {:?}", filename, prefixes);
    }
    Ok(vocabulary)
}

pub fn read_vocabulary<R: BufRead>(reader: R, prefixes: &[&str], source_name: &str) -> Result<(Vocabulary, LoadStats), VocabError> {
    let prefixes: FxHashSet<&str> = prefixes.iter().copied().collect();
    let mut vocabulary = Vocabulary::new();
    let mut stats = LoadStats::default();
    let mut header_seen = false;
    for line in reader.lines() {
        let line = line?;
        for row in split_rows(&line) {
            // Header row, content not checked
            if !header_seen {
                header_seen = true;
                continue;
            }
            stats.lines += 1;
            let Some(record) = CorpusRecord::parse(row) else {
                stats.short += 1;
                continue;
            };
            if record.is_excluded() {
                continue;
            }
            if !record.book_prefix().is_some_and(|prefix| prefixes.contains(prefix)) {
                continue;
            }
            if let Some(word) = record.word() {
                stats.kept += 1;
                vocabulary.insert(word);
            }
        }
    }
    if !header_seen {
        return Err(VocabError::MissingHeader(source_name.to_string()));
    }
    Ok((vocabulary, stats))
}

// `lines()` only ends lines at "\n" and "\r\n". Old Mac exports end them
// with a lone '\r', so split those here. An empty line is still one row.
fn split_rows(line: &str) -> impl Iterator<Item = &str> {
    line.split_terminator('\r').chain(line.is_empty().then_some(""))
}
