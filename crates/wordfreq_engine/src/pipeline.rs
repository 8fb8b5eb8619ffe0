use std::fmt;
use std::path::PathBuf;

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;
use wordfreq_logging::{wf_debug, wf_info};

use crate::count::FrequencyTable;
use crate::load::{load_text, LoadError};
use crate::token::{Tokenizer, WhitespaceTokenizer};
use crate::write::{write_table, OutputStyle, WriteError};

pub const DEFAULT_INPUT: &str = "enwik6.txt";
pub const DEFAULT_OUTPUT: &str = "word_freqs.json";
/// Number of most frequent tokens carried in a [`RunSummary`].
pub const SUMMARY_TOP_N: usize = 10;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub encoding: &'static Encoding,
    pub style: OutputStyle,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            encoding: UTF_8,
            style: OutputStyle::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loading,
    Counting,
    Writing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Loading => write!(f, "loading"),
            Stage::Counting => write!(f, "counting"),
            Stage::Writing => write!(f, "writing"),
            Stage::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub chars_read: usize,
    pub total_tokens: u64,
    pub distinct_tokens: usize,
    pub most_common: Vec<(String, u64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Read,
    Decode,
    Write,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::FileNotFound => write!(f, "file not found"),
            ErrorKind::Read => write!(f, "read error"),
            ErrorKind::Decode => write!(f, "decode error"),
            ErrorKind::Write => write!(f, "write error"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Load(LoadError::FileNotFound(_)) => ErrorKind::FileNotFound,
            PipelineError::Load(LoadError::Read { .. }) => ErrorKind::Read,
            PipelineError::Load(LoadError::Decode { .. }) => ErrorKind::Decode,
            PipelineError::Write(_) => ErrorKind::Write,
        }
    }

    /// Stage that was running when the error occurred.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Load(_) => Stage::Loading,
            PipelineError::Write(_) => Stage::Writing,
        }
    }
}

/// Load, count and write the tokens of `config.input` in one pass.
///
/// The output file is only touched once the table is complete, so a failed
/// load leaves any previous output untouched.
pub fn run(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    run_with(config, &WhitespaceTokenizer)
}

pub fn run_with<T: Tokenizer>(
    config: &PipelineConfig,
    tokenizer: &T,
) -> Result<RunSummary, PipelineError> {
    wf_debug!("Stage {}: {:?} as {}", Stage::Loading, config.input, config.encoding.name());
    let text = load_text(&config.input, config.encoding)?;
    let chars_read = text.chars().count();

    wf_debug!("Stage {}: {} chars", Stage::Counting, chars_read);
    let table = FrequencyTable::from_tokens(tokenizer.tokenize(&text));
    drop(text);
    wf_info!(
        "Counted {} tokens ({} distinct) in {:?}",
        table.total(),
        table.len(),
        config.input
    );

    wf_debug!("Stage {}: {:?}", Stage::Writing, config.output);
    let output_path = write_table(&table, &config.output, config.style)?;

    wf_info!("Stage {}: wrote {:?}", Stage::Done, output_path);
    Ok(RunSummary {
        output_path,
        chars_read,
        total_tokens: table.total(),
        distinct_tokens: table.len(),
        most_common: table
            .most_common(SUMMARY_TOP_N)
            .into_iter()
            .map(|(token, count)| (token.to_owned(), count))
            .collect(),
    })
}
