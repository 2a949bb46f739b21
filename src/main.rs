use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use lsa_vectorizer::{
    Analysis, Body, IdfSmoothing, LabelGroup, RankedTerms, StopWords, TopicTable, VectorizerConfig,
    Weighting,
};

/// Latent semantic analysis of a body of short documents.
#[derive(Parser)]
#[command(name = "lsa-vectorizer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the four-sentence example body
    Toy {
        #[arg(long, env = "LSA_TOPICS", default_value = "2")]
        topics: usize,

        #[arg(long, env = "LSA_FORMAT", value_enum, default_value = "table")]
        format: Format,
    },

    /// Analyze a CSV body (one document per row)
    Analyze {
        /// CSV file with a header row
        #[arg(long, env = "LSA_INPUT")]
        input: PathBuf,

        #[arg(long, env = "LSA_TEXT_COLUMN", default_value = "sentence")]
        text_column: String,

        /// Column used to label documents (e.g. the title of the work)
        #[arg(long, env = "LSA_LABEL_COLUMN")]
        label_column: Option<String>,

        #[arg(long, env = "LSA_WEIGHTING", value_enum, default_value = "count")]
        weighting: WeightingArg,

        #[arg(long, env = "LSA_IDF", value_enum, default_value = "plain")]
        idf: IdfArg,

        /// Scale TF-IDF rows to unit length
        #[arg(long, env = "LSA_NORMALIZE")]
        normalize: bool,

        #[arg(long, env = "LSA_STOP_WORDS", value_enum, default_value = "none")]
        stop_words: StopWordsArg,

        /// Minimum number of documents a term must appear in
        #[arg(long, env = "LSA_MIN_DF", default_value = "1")]
        min_df: u64,

        #[arg(long, env = "LSA_MIN_TOKEN_LEN", default_value = "1")]
        min_token_len: usize,

        #[arg(long, env = "LSA_TOPICS", default_value = "2")]
        topics: usize,

        /// Terms listed per topic
        #[arg(long, env = "LSA_TOP_TERMS", default_value = "10")]
        top_terms: usize,

        /// Topic table rows printed
        #[arg(long, env = "LSA_ROWS", default_value = "10")]
        rows: usize,

        #[arg(long, env = "LSA_FORMAT", value_enum, default_value = "table")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum WeightingArg {
    Count,
    Tfidf,
}

#[derive(Clone, Copy, ValueEnum)]
enum IdfArg {
    Plain,
    Smooth,
}

#[derive(Clone, Copy, ValueEnum)]
enum StopWordsArg {
    None,
    English,
}

/// JSON output
#[derive(Serialize)]
struct Report<'a> {
    dictionary_size: usize,
    singular_values: Vec<f64>,
    explained_variance_ratio: Vec<f64>,
    top_terms: &'a [RankedTerms],
    groups: Vec<LabelGroup>,
    rows: &'a TopicTable,
}

const TOY_BODY: [&str; 4] = [
    "the quick brown fox",
    "the slow brown dog",
    "the quick red dog",
    "the lazy yellow fox",
];

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lsa_vectorizer=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Toy { topics, format } => {
            let body = Body::from_texts(TOY_BODY);
            let analysis = Analysis::run(&body, &VectorizerConfig::default(), topics)
                .context("toy analysis failed")?;
            print_report(&analysis, usize::MAX, TOY_BODY.len(), format)
        }
        Commands::Analyze {
            input,
            text_column,
            label_column,
            weighting,
            idf,
            normalize,
            stop_words,
            min_df,
            min_token_len,
            topics,
            top_terms,
            rows,
            format,
        } => {
            let body = Body::from_csv_path(&input, &text_column, label_column.as_deref())
                .with_context(|| format!("failed to read body from {}", input.display()))?;
            info!(documents = body.len(), path = %input.display(), "body loaded");

            let config = VectorizerConfig::default()
                .with_weighting(match weighting {
                    WeightingArg::Count => Weighting::Count,
                    WeightingArg::Tfidf => Weighting::TfIdf,
                })
                .with_idf(match idf {
                    IdfArg::Plain => IdfSmoothing::Plain,
                    IdfArg::Smooth => IdfSmoothing::Smooth,
                })
                .with_normalize(normalize)
                .with_stop_words(match stop_words {
                    StopWordsArg::None => StopWords::None,
                    StopWordsArg::English => StopWords::English,
                })
                .with_min_document_frequency(min_df)
                .with_min_token_len(min_token_len);

            let analysis = Analysis::run(&body, &config, topics).context("analysis failed")?;
            print_report(&analysis, top_terms, rows, format)
        }
    }
}

fn print_report(analysis: &Analysis, top_terms: usize, rows: usize, format: Format) -> Result<()> {
    let model = &analysis.model;
    let ranked = (0..model.n_topics())
        .map(|t| model.top_terms(t, top_terms))
        .collect::<lsa_vectorizer::Result<Vec<_>>>()?;
    let head = analysis.table.head(rows);

    match format {
        Format::Json => {
            let report = Report {
                dictionary_size: model.dictionary().len(),
                singular_values: model.singular_values().to_vec(),
                explained_variance_ratio: model.explained_variance_ratio().to_vec(),
                top_terms: &ranked,
                groups: analysis.table.group_by_label(),
                rows: &head,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Table => {
            println!("dictionary: {} terms", model.dictionary().len());
            for (i, (s, r)) in model
                .singular_values()
                .iter()
                .zip(model.explained_variance_ratio())
                .enumerate()
            {
                println!("topic_{}: singular value {:.6}, explained {:.2}%", i + 1, s, r * 100.0);
            }
            println!();
            print!("{}", head);
            println!();
            for r in &ranked {
                print!("{}", r);
            }
        }
    }
    Ok(())
}
