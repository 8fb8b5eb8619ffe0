use std::path::PathBuf;

use anyhow::bail;
use wordfreq_engine::PipelineConfig;

pub const USAGE: &str = "usage: wordfreq [INPUT [OUTPUT]]";

/// Build the pipeline configuration from positional arguments (program name
/// already stripped). Missing arguments keep the defaults.
pub fn from_args<I>(args: I) -> anyhow::Result<PipelineConfig>
where
    I: IntoIterator<Item = String>,
{
    let mut config = PipelineConfig::default();
    let mut args = args.into_iter();
    if let Some(input) = args.next() {
        config.input = PathBuf::from(input);
    }
    if let Some(output) = args.next() {
        config.output = PathBuf::from(output);
    }
    if let Some(extra) = args.next() {
        bail!("unexpected argument {extra:?}\n{USAGE}");
    }
    Ok(config)
}
