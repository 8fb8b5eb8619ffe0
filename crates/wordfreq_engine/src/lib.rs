//! Wordfreq engine: load a text file, count whitespace tokens, persist the counts.
mod count;
mod decode;
mod load;
mod persist;
mod pipeline;
mod token;
mod write;

pub use count::{count_words, FrequencyTable, Iter};
pub use decode::{decode_text, resolve_encoding, DecodeError};
pub use load::{load_text, LoadError};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{
    run, run_with, ErrorKind, PipelineConfig, PipelineError, RunSummary, Stage, DEFAULT_INPUT,
    DEFAULT_OUTPUT, SUMMARY_TOP_N,
};
pub use token::{Tokenizer, WhitespaceTokenizer};
pub use write::{render_table, write_table, OutputStyle, WriteError};

pub use encoding_rs::Encoding;
