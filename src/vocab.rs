use rustc_hash::FxHashSet;

/// Distinct token strings collected for one book group.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vocabulary {
    words: FxHashSet<String>,
}

impl Vocabulary {
    pub fn new() -> Vocabulary {
        Vocabulary::default()
    }

    pub fn insert(&mut self, word: &str) -> bool {
        if self.words.contains(word) {
            return false;
        }
        self.words.insert(word.to_string())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in `self` that never occur in `known`, i.e. self \ known.
    /// Exact string equality, no folding or stemming.
    pub fn unique_to(&self, known: &Vocabulary) -> Vocabulary {
        let words = self.words
            .iter()
            .filter(|word| !known.contains(word))
            .cloned()
            .collect();
        Vocabulary { words }
    }

    /// All words in ascending `str` order.
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for word in iter {
            vocabulary.insert(word.as_ref());
        }
        vocabulary
    }
}
