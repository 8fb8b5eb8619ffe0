mod config;
mod logging;

use std::env;

use anyhow::Context;
use wordfreq_logging::{wf_debug, wf_error, wf_info};

fn main() -> anyhow::Result<()> {
    logging::initialize(wordfreq_logging::default_level());

    let config = config::from_args(env::args().skip(1))?;
    let summary = wordfreq_engine::run(&config)
        .inspect_err(|err| {
            wf_error!(
                "Run failed at {} stage ({}): {}",
                err.stage(),
                err.kind(),
                err
            )
        })
        .with_context(|| format!("counting words in {}", config.input.display()))?;

    wf_info!(
        "{} tokens, {} distinct, {} chars read",
        summary.total_tokens,
        summary.distinct_tokens,
        summary.chars_read
    );
    for (token, count) in &summary.most_common {
        wf_debug!("{count:>10}  {token}");
    }
    println!("{}", summary.output_path.display());
    Ok(())
}
