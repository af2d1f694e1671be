// USFM book abbreviation to the two-digit book number that prefixes every
// token id in the corpus ("01001001" is GEN 1:1).
// The numbers are fixed by the corpus format, do not renumber.

pub type BookCode = &'static str;
pub type BookPrefix = &'static str;

pub const BOOK_COUNT: usize = 66;

pub const BOOKS: [(BookCode, BookPrefix); BOOK_COUNT] = [
    // Old Testament
    ("GEN", "01"), ("EXO", "02"), ("LEV", "03"), ("NUM", "04"), ("DEU", "05"),
    ("JOS", "06"), ("JDG", "07"), ("RUT", "08"), ("1SA", "09"), ("2SA", "10"),
    ("1KI", "11"), ("2KI", "12"), ("1CH", "13"), ("2CH", "14"), ("EZR", "15"),
    ("NEH", "16"), ("EST", "17"), ("JOB", "18"), ("PSA", "19"), ("PRO", "20"),
    ("ECC", "21"), ("SNG", "22"), ("ISA", "23"), ("JER", "24"), ("LAM", "25"),
    ("EZK", "26"), ("DAN", "27"), ("HOS", "28"), ("JOL", "29"), ("AMO", "30"),
    ("OBA", "31"), ("JON", "32"), ("MIC", "33"), ("NAM", "34"), ("HAB", "35"),
    ("ZEP", "36"), ("HAG", "37"), ("ZEC", "38"), ("MAL", "39"),
    // New Testament
    ("MAT", "40"), ("MRK", "41"), ("LUK", "42"), ("JHN", "43"), ("ACT", "44"),
    ("ROM", "45"), ("1CO", "46"), ("2CO", "47"), ("GAL", "48"), ("EPH", "49"),
    ("PHP", "50"), ("COL", "51"), ("1TH", "52"), ("2TH", "53"), ("1TI", "54"),
    ("2TI", "55"), ("TIT", "56"), ("PHM", "57"), ("HEB", "58"), ("JAS", "59"),
    ("1PE", "60"), ("2PE", "61"), ("1JN", "62"), ("2JN", "63"), ("3JN", "64"),
    ("JUD", "65"), ("REV", "66"),
];

/// Looks up the corpus prefix for a book abbreviation.
/// Matching is exact and case-sensitive, "mat" is not "MAT".
pub fn book_prefix(code: &str) -> Option<BookPrefix> {
    BOOKS.iter()
        .find(|(book, _)| *book == code)
        .map(|(_, prefix)| *prefix)
}
