use textsearch_core::tokenizer::{tokenize, TokenizerConfig};

#[test]
fn it_lowercases_and_drops_punctuation() {
    let words = tokenize("Example: SEARCH, engine!", &TokenizerConfig::default());
    assert_eq!(words, vec!["example", "search", "engine"]);
}

#[test]
fn it_stems_when_enabled() {
    let config = TokenizerConfig { stem: true, ..TokenizerConfig::default() };
    let words = tokenize("Running Runners RUN!", &config);
    assert!(words.iter().all(|w| w.starts_with("run")));
    assert!(words.contains(&"run".to_string()));
}

#[test]
fn it_filters_stopwords() {
    let words = tokenize("The quick brown fox and the lazy dog", &TokenizerConfig::default());
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words, vec!["quick", "brown", "fox", "lazy", "dog"]);
}

#[test]
fn it_splits_contractions_into_dropped_fragments() {
    let words = tokenize("don't stop", &TokenizerConfig::default());
    assert_eq!(words, vec!["stop"]);
}
