use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CORPUS_FILE: &str = "token_OCCB-simplified.tsv";

const SAMPLE: &str = "id\tsrc\ttext\tlemma\texclude\tpos\tgloss\tnote\n\
    40001001\tx\tthe\tlem\t\tn\tg\tn\n\
    40001002\tx\tkingdom\tlem\t\tn\tg\tn\n\
    40001003\tx\t，\tlem\t\tn\tg\tn\n\
    40001004\tx\tskipped\tlem\tY\tn\tg\tn\n\
    40001005\tx\tshort\tlem\t\tn\tg\n\
    01001001\tx\tthe\tlem\t\tn\tg\tn\n";

fn vocabfind(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vocabfind"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run failed")
}

fn corpus_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CORPUS_FILE), SAMPLE).unwrap();
    dir
}

#[test]
fn sample_comparison() {
    let dir = corpus_dir();
    let output = vocabfind(dir.path(), &["GEN", "MAT"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!(
        "Bible Vocabulary Finder\n{}\n\
        First set of books: GEN\n\
        Second set of books: MAT\n\
        \n\
        Loading vocabulary from first set...\n\
        Loading vocabulary from second set...\n\
        \n\
        Vocabulary Statistics:\n\
        Words in first set: 1\n\
        Words in second set: 2\n\
        Unique words in second set: 1\n\
        \n\
        Unique vocabulary found in MAT:\n\
        {}\n\
        kingdom   \n\
        \n\
        Total unique words: 1\n",
        "=".repeat(50),
        "-".repeat(40)
    );
    assert_eq!(stdout, expected);
}

#[test]
fn nothing_new_is_still_success() {
    let dir = corpus_dir();
    let output = vocabfind(dir.path(), &["MAT", "GEN"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unique words in second set: 0"));
    assert!(stdout.contains("No unique vocabulary found in GEN."));
}

#[test]
fn unknown_book_fails() {
    let dir = corpus_dir();
    let output = vocabfind(dir.path(), &["GEN XYZ", "MAT abc"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: Unrecognized book abbreviations: XYZ, abc"));
    assert!(stdout.trim_end().ends_with("Valid abbreviations include: GEN, EXO, MAT, MRK, ROM, etc."));
    assert!(!stdout.contains("Loading"));
}

#[test]
fn wrong_arity_prints_usage() {
    let dir = corpus_dir();
    for args in [vec![], vec!["GEN"], vec!["GEN", "MAT", "LUK"]] {
        let output = vocabfind(dir.path(), &args);
        assert!(!output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage: vocabfind"));
        assert!(stdout.contains("Example: vocabfind \"MAT MRK LUK ACT ROM\" \"GAL PHP\""));
    }
}

#[test]
fn blank_group_prints_usage_like_wrong_arity() {
    let dir = corpus_dir();
    let blank = vocabfind(dir.path(), &["GEN", "  "]);
    let missing = vocabfind(dir.path(), &["GEN"]);
    assert!(!blank.status.success());
    assert_eq!(blank.stdout, missing.stdout);
    assert!(!String::from_utf8_lossy(&blank.stdout).contains("Bible Vocabulary Finder"));
}

#[test]
fn missing_corpus_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = vocabfind(dir.path(), &["GEN", "MAT"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: File 'token_OCCB-simplified.tsv' not found."));
    assert!(stdout.contains("Make sure 'token_OCCB-simplified.tsv' is in the current directory."));
    assert!(stdout.contains("Loading vocabulary from first set..."));
    assert!(!stdout.contains("Loading vocabulary from second set..."));
}

#[test]
fn json_output() {
    let dir = corpus_dir();
    let output = vocabfind(dir.path(), &["-F", "json", "GEN", "MAT"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["first_count"], 1);
    assert_eq!(value["second_count"], 2);
    assert_eq!(value["unique_words"], serde_json::json!(["kingdom"]));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = corpus_dir();
    let quiet = vocabfind(dir.path(), &["GEN", "MAT"]);
    let verbose = vocabfind(dir.path(), &["-v", "GEN", "MAT"]);
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("short rows skipped"));
}
