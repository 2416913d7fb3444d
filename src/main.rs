//! WeirdText - reversible word scrambling
//!
//! A CLI adapter over the codec: `encode` scrambles word interiors and
//! prints the separator-delimited document, `decode` reconstructs the
//! original text from such a document.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;

use weirdtext::{decode_with_config, encode_with_config, DecoderConfig, EncoderConfig};

/// WeirdText - scramble word interiors, reversibly
#[derive(Parser)]
#[command(name = "weirdtext")]
#[command(version)]
#[command(about = "Scrambles the interior letters of words and decodes them back")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode plain text into a WeirdText document
    Encode {
        /// Text to encode (reads stdin if neither this nor --input is given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Verbose output (shows scramble counts)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode a WeirdText document back into plain text
    ///
    /// Fails on documents that do not split into exactly two segments or
    /// whose key list does not match the scrambled text.
    Decode {
        /// Document to decode (reads stdin if neither this nor --input is given)
        text: Option<String>,

        /// Read the document from a file instead
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Verbose output (shows matching statistics and ambiguity warnings)
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            text,
            input,
            verbose,
        } => {
            let text = read_text(text, input)?;
            let encoded = encode_with_config(&text, &EncoderConfig { verbose });
            println!("{}", encoded.document);
        }
        Commands::Decode {
            text,
            input,
            verbose,
        } => {
            let document = read_text(text, input)?;
            let decoded = decode_with_config(&document, &DecoderConfig { verbose })
                .context("failed to decode document")?;
            println!("{}", decoded.text);
        }
    }

    Ok(())
}

/// Resolves the input text from an argument, a file, or stdin.
fn read_text(text: Option<String>, input: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = input {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}
