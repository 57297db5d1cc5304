use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use textsearch_core::tokenizer::{tokenize, TokenizerConfig};
use walkdir::WalkDir;

lazy_static! {
    static ref CHUNK: Regex = Regex::new(r"\d+|\D+").expect("valid regex");
}

/// Documents in id order: `paths[i]` produced `tokens[i]`.
#[derive(Debug, Default)]
pub struct Corpus {
    pub paths: Vec<PathBuf>,
    pub tokens: Vec<Vec<String>>,
}

impl Corpus {
    pub fn len(&self) -> usize { self.paths.len() }

    pub fn is_empty(&self) -> bool { self.paths.is_empty() }
}

/// `*.txt` files directly inside `dir`, in natural file-name order.
/// A missing directory yields no files.
pub fn discover(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt"))
        .collect();
    files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
    files
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Compare strings chunk by chunk: digit runs numerically, the rest lexically.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = CHUNK.find_iter(a).map(|m| m.as_str());
    let mut right = CHUNK.find_iter(b).map(|m| m.as_str());
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u128>(), y.parse::<u128>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny).then_with(|| x.len().cmp(&y.len())),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Load documents from `input`, or from `fallback` when `input` holds no text files.
pub fn load(input: &Path, fallback: &Path, config: &TokenizerConfig) -> Result<Corpus> {
    let mut paths = discover(input);
    if paths.is_empty() {
        tracing::info!(dir = %fallback.display(), "no documents in input directory, using fallback");
        paths = discover(fallback);
    } else {
        tracing::info!(dir = %input.display(), "loading documents");
    }

    let mut tokens = Vec::with_capacity(paths.len());
    for (doc_id, path) in paths.iter().enumerate() {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let doc_tokens: Vec<String> = text.lines().flat_map(|line| tokenize(line.trim(), config)).collect();
        tracing::debug!(doc_id, path = %path.display(), tokens = doc_tokens.len(), "loaded document");
        tokens.push(doc_tokens);
    }
    Ok(Corpus { paths, tokens })
}
