use std::io::Read;

use anyhow::{bail, Context, Result};
use cipher_cracker::{break_caesar, load_dictionary, rotate, CaesarOutcome};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Caesar cipher program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file (standard input when omitted)
    #[arg(short, long, help = "Path to the input file (reads stdin when omitted)")]
    file: Option<String>,

    /// Path to the output file (standard output when omitted)
    #[arg(short, long, help = "Path to the output file (writes stdout when omitted)")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Rotation amount used for encryption
    #[arg(short, long, allow_negative_numbers = true, help = "Rotation amount for encryption")]
    key: Option<i32>,

    /// Word list used to recognise a correct decryption
    #[arg(short, long, default_value = "dictionary.txt", help = "Path to the dictionary file")]
    dictionary: String,
}

/// Enum representing the mode of operation.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Rotate the input by a known key
    Encrypt,
    /// Break the input without the key
    Decrypt,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    let content: String = read_input(cli.file.as_deref())?;

    let result: String = match cli.mode {
        OperationMode::Encrypt => {
            let Some(key) = cli.key else {
                bail!("--key is required for encryption");
            };
            info!(key, "encrypting");
            rotate(&content, key)
        }
        OperationMode::Decrypt => {
            let dictionary = load_dictionary(&cli.dictionary)
                .with_context(|| format!("Failed to load dictionary {}", cli.dictionary))?;
            decrypt(&content, &dictionary)
        }
    };

    write_output(cli.output.as_deref(), &result)
}

/// Breaks a Caesar cipher and lists every plausible decryption.
///
/// # Arguments
///
/// * `content` - The ciphertext.
/// * `dictionary` - Known words used to recognise a correct rotation.
///
/// # Returns
///
/// One candidate plaintext per line, or a message when no rotation qualifies.
fn decrypt(content: &str, dictionary: &cipher_cracker::Dictionary) -> String {
    match break_caesar(content, dictionary) {
        CaesarOutcome::Decrypted(candidates) => candidates
            .iter()
            .map(|candidate| {
                info!(key = candidate.key(), matches = candidate.matches, "candidate decryption");
                format!("{}\n", candidate.text)
            })
            .collect(),
        CaesarOutcome::NoGoodDecryption => "No good decryptions found\n".to_string(),
    }
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
