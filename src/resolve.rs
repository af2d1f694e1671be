use crate::books::{book_prefix, BookPrefix};
use crate::error::VocabError;
use log::debug;

/// One side of the comparison: the abbreviations as typed and their corpus prefixes.
/// Order and duplicates are kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct BookGroup {
    pub books: Vec<String>,
    pub prefixes: Vec<BookPrefix>,
}

impl BookGroup {
    /// The group as echoed in the report, "MAT MRK LUK".
    pub fn label(&self) -> String {
        self.books.join(" ")
    }
}

pub fn split_books(list: &str) -> Vec<String> {
    list.split_whitespace().map(|book| book.to_string()).collect()
}

// Both lists are validated together so that the error names every bad
// abbreviation from either side, not just the first one hit.
pub fn resolve_groups(first: &str, second: &str) -> Result<(BookGroup, BookGroup), VocabError> {
    let first_books = split_books(first);
    let second_books = split_books(second);
    if first_books.is_empty() || second_books.is_empty() {
        return Err(VocabError::Usage(crate::args::usage()));
    }
    validate_books(first_books.iter().chain(second_books.iter()))?;
    let first_group = to_group(first_books);
    let second_group = to_group(second_books);
    debug!("Resolved prefixes: first {:?}, second {:?}", first_group.prefixes, second_group.prefixes);
    Ok((first_group, second_group))
}

fn validate_books<'a>(all_books: impl Iterator<Item = &'a String>) -> Result<(), VocabError> {
    let invalid_books: Vec<String> = all_books
        .filter(|book| book_prefix(book).is_none())
        .cloned()
        .collect();
    if invalid_books.is_empty() {
        Ok(())
    } else {
        Err(VocabError::UnknownBooks(invalid_books))
    }
}

// Only called after validation, unknown books cannot reach here.
fn to_group(books: Vec<String>) -> BookGroup {
    let prefixes = books.iter().filter_map(|book| book_prefix(book)).collect();
    BookGroup { books, prefixes }
}
