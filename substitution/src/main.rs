use std::io::Read;

use anyhow::{Context, Result};
use cipher_cracker::{
    break_cipher, break_cipher_partitioned, encrypt_random, load_quadgrams, substitute,
    BreakerConfig, CipherKey, QuadgramScorer, SeededRandom,
};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the substitution cipher program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file (standard input when omitted)
    #[arg(short, long, help = "Path to the input file (reads stdin when omitted)")]
    file: Option<String>,

    /// Path to the output file (standard output when omitted)
    #[arg(short, long, help = "Path to the output file (writes stdout when omitted)")]
    output: Option<String>,

    /// Mode of operation
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt/score)")]
    mode: OperationMode,

    /// Substitution key for encryption; a random key is drawn when omitted
    #[arg(short, long, help = "26-letter substitution key (random when omitted)")]
    key: Option<CipherKey>,

    /// Quadgram frequency table, one `QUAD,count` entry per line
    #[arg(short, long, default_value = "english_quadgrams.txt", help = "Path to the quadgram file")]
    quadgrams: String,

    /// Seed for the random number generator; the clock is used when omitted
    #[arg(short, long, help = "Seed for reproducible runs")]
    seed: Option<u64>,

    /// Number of independent hill climbs
    #[arg(short, long, default_value_t = BreakerConfig::default().restarts)]
    restarts: usize,

    /// Consecutive non-improving swaps that end a climb
    #[arg(long, default_value_t = BreakerConfig::default().stall_limit)]
    stall_limit: usize,

    /// Run restarts in parallel, each on its own seed derived from --seed
    #[arg(short, long)]
    parallel: bool,
}

/// Enum representing the mode of operation.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Apply a known or random substitution key
    Encrypt,
    /// Recover the plaintext by hill climbing
    Decrypt,
    /// Print the English-ness score of the input
    Score,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    let content: String = read_input(cli.file.as_deref())?;
    let mut rng: SeededRandom = SeededRandom::from_optional_seed(cli.seed);
    info!(seed = rng.seed(), "random number generator seeded");

    let result: String = match cli.mode {
        OperationMode::Encrypt => {
            let (key, ciphertext) = match cli.key {
                Some(key) => (key, substitute(&key, &content)),
                None => encrypt_random(&content, &mut rng),
            };
            info!(%key, "encrypted");
            ciphertext
        }
        OperationMode::Decrypt => {
            let scorer: QuadgramScorer = load_scorer(&cli.quadgrams)?;
            let config: BreakerConfig = BreakerConfig {
                restarts: cli.restarts,
                stall_limit: cli.stall_limit,
            };
            let best = if cli.parallel {
                break_cipher_partitioned(&content, &scorer, rng.seed(), &config)
            } else {
                break_cipher(&content, &scorer, &mut rng, &config)
            };
            info!(key = %best.key.inverse(), score = best.score, "recovered encryption key");
            best.text
        }
        OperationMode::Score => {
            let scorer: QuadgramScorer = load_scorer(&cli.quadgrams)?;
            format!("{}\n", scorer.score_text(&content))
        }
    };

    write_output(cli.output.as_deref(), &result)
}

/// Loads the quadgram table used to score candidate decryptions.
///
/// # Arguments
///
/// * `path` - Path of the `QUAD,count` frequency file.
///
/// # Returns
///
/// A `QuadgramScorer` built from the file.
fn load_scorer(path: &str) -> Result<QuadgramScorer> {
    load_quadgrams(path).with_context(|| format!("Failed to load quadgrams {path}"))
}

/// Reads the text to process.
///
/// # Arguments
///
/// * `file` - Path of the input file, or `None` to read standard input.
///
/// # Returns
///
/// The full input as a `String`.
fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {path}")),
        None => {
            let mut content: String = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            Ok(content)
        }
    }
}

/// Writes the result to a file or to standard output.
///
/// # Arguments
///
/// * `output` - Path of the output file, or `None` to print to standard output.
/// * `result` - The text to write.
fn write_output(output: Option<&str>, result: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, result)
            .with_context(|| format!("Failed to write output file {path}")),
        None => {
            print!("{result}");
            Ok(())
        }
    }
}
