use crate::resolve::BookGroup;
use crate::vocab::Vocabulary;
use serde::Serialize;

/// Everything the renderers print: the groups as typed, the three set
/// sizes and the sorted words found only in the second group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabReport {
    pub first_books: String,
    pub second_books: String,
    pub first_count: usize,
    pub second_count: usize,
    pub unique_count: usize,
    pub unique_words: Vec<String>,
}

impl VocabReport {
    pub fn new(first: &BookGroup, second: &BookGroup, first_vocab: &Vocabulary, second_vocab: &Vocabulary) -> VocabReport {
        let unique = second_vocab.unique_to(first_vocab);
        VocabReport {
            first_books: first.label(),
            second_books: second.label(),
            first_count: first_vocab.len(),
            second_count: second_vocab.len(),
            unique_count: unique.len(),
            unique_words: unique.sorted(),
        }
    }
}
