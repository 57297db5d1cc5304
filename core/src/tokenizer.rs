use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}]+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves","you","your","yours","yourself","yourselves",
            "he","him","his","himself","she","her","hers","herself","it","its","itself",
            "they","them","their","theirs","themselves","what","which","who","whom","this","that","these","those",
            "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
            "a","an","the","and","but","if","or","because","as","until","while","of","at","by","for","with","about",
            "against","between","into","through","during","before","after","above","below","to","from","up","down",
            "in","out","on","off","over","under","again","further","then","once","here","there","when","where","why","how",
            "all","any","both","each","few","more","most","other","some","such","no","nor","not","only","own","same",
            "so","than","too","very","s","t","can","will","just","don","should","now"
        ];
        words.iter().copied().collect()
    };
}

/// Controls how raw text is turned into index tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub stem: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { lowercase: true, remove_stopwords: true, stem: false }
    }
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Tokenize text into normalized word tokens: NFKC, optional lowercase,
/// alphanumeric runs only, optional stopword removal and stemming.
///
/// Positions are not returned; the index assigns them from the order of the
/// returned sequence.
pub fn tokenize(text: &str, config: &TokenizerConfig) -> Vec<String> {
    let mut normalized = text.nfkc().collect::<String>();
    if config.lowercase {
        normalized = normalized.to_lowercase();
    }
    RE.find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|token| !(config.remove_stopwords && is_stopword(token)))
        .map(|token| {
            if config.stem { STEMMER.stem(token).into_owned() } else { token.to_string() }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        let t = tokenize("Hello, world! (again)", &TokenizerConfig::default());
        assert_eq!(t, vec!["hello", "world"]);
    }

    #[test]
    fn consecutive_stopwords_are_all_removed() {
        let t = tokenize("the a an cat", &TokenizerConfig::default());
        assert_eq!(t, vec!["cat"]);
    }

    #[test]
    fn keeps_stopwords_when_disabled() {
        let config = TokenizerConfig { remove_stopwords: false, ..TokenizerConfig::default() };
        let t = tokenize("The cat", &config);
        assert_eq!(t, vec!["the", "cat"]);
    }
}
