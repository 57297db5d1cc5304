mod corpus;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use textsearch_core::query::{resolve, Matches};
use textsearch_core::report::{term_table, tf_idf_matrix};
use textsearch_core::scoring::{rank, DocumentLengths, QueryVector, ScoredDoc};
use textsearch_core::tokenizer::{tokenize, TokenizerConfig};
use textsearch_core::TermIndex;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "textsearch")]
#[command(about = "Positional phrase search and TF-IDF ranking over a directory of text files", long_about = None)]
struct Cli {
    /// Directory holding the *.txt documents
    #[arg(long, default_value = "files")]
    input: PathBuf,
    /// Directory used when the input directory has no documents
    #[arg(long, default_value = "default files")]
    fallback: PathBuf,
    /// Apply English stemming to documents and queries
    #[arg(long, default_value_t = false)]
    stem: bool,
    /// Keep stop words instead of removing them
    #[arg(long, default_value_t = false)]
    keep_stopwords: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List every term with its document frequency and postings
    Terms,
    /// Print the term x document TF-IDF matrix
    Matrix,
    /// Run a phrase query and rank documents by cosine similarity
    Query {
        /// Free-text query
        #[arg(default_value = "example search")]
        text: String,
    },
}

#[derive(Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    tokens: &'a [String],
    matches: &'a Matches,
    ranking: Vec<RankedDoc>,
}

#[derive(Serialize)]
struct RankedDoc {
    doc_id: u32,
    path: String,
    score: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = TokenizerConfig { remove_stopwords: !cli.keep_stopwords, stem: cli.stem, ..TokenizerConfig::default() };
    let corpus = corpus::load(&cli.input, &cli.fallback, &config)?;
    if corpus.is_empty() {
        tracing::warn!(input = %cli.input.display(), fallback = %cli.fallback.display(), "no documents found");
    }
    tracing::info!(num_docs = corpus.len(), "loaded corpus");
    for (doc_id, path) in corpus.paths.iter().enumerate() {
        tracing::info!(doc_id, path = %path.display(), "document");
    }
    let index = TermIndex::build(&corpus.tokens)?;

    match cli.command {
        Commands::Terms => print_terms(&index, cli.format),
        Commands::Matrix => print_matrix(&index, cli.format),
        Commands::Query { text } => run_query(&text, &index, &corpus, &config, cli.format),
    }
}

fn print_terms(index: &TermIndex, format: Format) -> Result<()> {
    let table = term_table(index);
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }
    for row in table {
        println!("{}, {}", row.token, row.document_frequency);
        for doc in row.documents {
            println!("{}: {:?}", doc.doc_id, doc.positions);
        }
        println!();
    }
    Ok(())
}

fn print_matrix(index: &TermIndex, format: Format) -> Result<()> {
    let matrix = tf_idf_matrix(index);
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }
    let header: String = (0..index.num_docs()).map(|d| format!("Doc{d}\t")).collect();
    println!("\t\t{header}");
    for (token, row) in matrix {
        let cells: String = row.iter().map(|w| format!("{w:.2}\t")).collect();
        println!("{token}\t\t{cells}");
    }
    Ok(())
}

fn run_query(text: &str, index: &TermIndex, corpus: &corpus::Corpus, config: &TokenizerConfig, format: Format) -> Result<()> {
    let tokens = tokenize(text.trim(), config);
    let matches = resolve(&tokens, index);
    tracing::info!(query = text, tokens = tokens.len(), matches = matches.len(), "query resolved");

    // Every token is known once something matched, so scoring cannot fail on
    // an unknown term.
    let ranked: Vec<ScoredDoc> = if matches.is_empty() {
        Vec::new()
    } else {
        let lengths = DocumentLengths::compute(index);
        let query = QueryVector::build(&tokens, index)?;
        rank(&query, index, &lengths)?
    };
    let ranking: Vec<RankedDoc> = ranked
        .into_iter()
        .map(|s| RankedDoc {
            doc_id: s.doc_id,
            path: corpus.paths[s.doc_id as usize].display().to_string(),
            score: s.score,
        })
        .collect();

    if format == Format::Json {
        let report = QueryReport { query: text, tokens: &tokens, matches: &matches, ranking };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Query: {tokens:?}");
    println!("documents matched: {matches:?}");
    for doc in ranking {
        println!("Similarity between the query and document {} ({}) is {}", doc.doc_id, doc.path, doc.score);
    }
    Ok(())
}
