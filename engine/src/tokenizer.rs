use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9\s]+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could","couldn",
            "did","didn","do","does","doesn","doing","don","down","during",
            "each","few","for","from","further",
            "had","hadn","has","hasn","have","haven","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","isn","it","its","itself",
            "let","me","more","most","mustn","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","shouldn","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn","we","were","weren","what","when","where","which","while","who","whom","why","with","won","would","wouldn",
            "you","your","yours","yourself","yourselves",
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Normalize raw text into index terms: NFKC fold, lowercase, replace
/// everything outside ASCII alphanumerics and whitespace with spaces, split
/// on whitespace, drop stopwords and tokens of length <= 2, then stem.
///
/// The same pipeline runs on documents at build time and on queries at
/// search time; a mismatch would silently kill recall. Non-ASCII letters act
/// as word separators, so "café" indexes as "caf". Empty or whitespace-only
/// input yields an empty vec, never an error.
pub fn normalize(text: &str) -> Vec<String> {
    let folded = text.nfkc().collect::<String>().to_lowercase();
    let cleaned = NON_ALNUM.replace_all(&folded, " ");
    cleaned
        .split_whitespace()
        .filter(|token| token.len() > 2 && !is_stopword(token))
        .map(|token| STEMMER.stem(token).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize() {
        let terms = normalize("Running, runner's run!");
        assert!(terms.iter().any(|t| t == "run"));
    }

    #[test]
    fn empty_input_yields_no_terms() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t\n ").is_empty());
    }
}
