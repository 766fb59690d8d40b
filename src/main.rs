//! `bpe`: trains a byte-pair encoding vocabulary from a text file, and
//! encodes/decodes sample input through it.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bpers::{Vocabulary, VocabFile, WordCounts};
use clap::{Parser, Subcommand};
use foldhash::fast::RandomState;

#[derive(Parser)]
#[command(name = "bpe", about = "A byte-pair encoding tokenizer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a vocabulary from a text file and write it to disk.
    Train {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 2000)]
        num_merges: u32,
        #[arg(long, default_value = "vocab.bin")]
        vocab_out: PathBuf,
    },
    /// Encode text using a previously trained vocabulary.
    Encode {
        #[arg(long)]
        vocab: PathBuf,
        #[arg(long)]
        text: String,
    },
    /// Decode a comma-separated list of token ids back to text.
    Decode {
        #[arg(long)]
        vocab: PathBuf,
        #[arg(long)]
        ids: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Train { input, num_merges, vocab_out } => train(&input, num_merges, &vocab_out),
        Command::Encode { vocab, text } => encode(&vocab, &text),
        Command::Decode { vocab, ids } => decode(&vocab, &ids),
    }
}

/// A simple whitespace pre-tokenizer. Pre-tokenization is treated as an
/// external collaborator the core doesn't implement; this is the
/// simplest one that can feed it a weighted word corpus.
fn build_word_counts(text: &str) -> WordCounts {
    let mut counts = WordCounts::with_hasher(RandomState::default());
    for word in text.split_whitespace() {
        let entry = counts.entry(word.as_bytes().to_vec()).or_insert(0);
        *entry = entry.saturating_add(1);
    }
    counts
}

fn train(input: &PathBuf, num_merges: u32, vocab_out: &PathBuf) -> Result<()> {
    let text = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let word_counts = build_word_counts(&text);
    log::info!("training on {} distinct words", word_counts.len());

    let vocab = Vocabulary::learn(&word_counts, num_merges).context("training vocabulary")?;
    let bytes = vocab.file().to_bytes().context("serializing vocabulary")?;
    fs::write(vocab_out, &bytes).with_context(|| format!("writing {}", vocab_out.display()))?;

    println!("trained vocabulary written to {}", vocab_out.display());
    Ok(())
}

fn load_vocab(vocab_path: &PathBuf) -> Result<Vocabulary> {
    let bytes = fs::read(vocab_path).with_context(|| format!("reading {}", vocab_path.display()))?;
    let file = VocabFile::from_bytes(&bytes).context("decoding vocabulary file")?;
    Vocabulary::from_file(file).context("building trie from vocabulary")
}

fn encode(vocab_path: &PathBuf, text: &str) -> Result<()> {
    let vocab = load_vocab(vocab_path)?;
    let ids = vocab.encode_batch(&[text.as_bytes().to_vec()]);
    let rendered: Vec<String> = ids.iter().map(u32::to_string).collect();
    println!("{}", rendered.join(","));
    Ok(())
}

fn decode(vocab_path: &PathBuf, ids: &str) -> Result<()> {
    let vocab = load_vocab(vocab_path)?;
    let parsed: Vec<u32> = ids
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.trim().parse::<u32>().with_context(|| format!("parsing token id {s:?}")))
        .collect::<Result<_>>()?;
    let bytes = vocab.decode(&parsed);
    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
