use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use study_summarizer::args::{print_output, Cli};
use study_summarizer::config::Config;
use study_summarizer::logging::{init_file_tracing, init_stderr_tracing};
use study_summarizer::ui::runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    if cli.print {
        init_stderr_tracing(&config.logging)?;
        return print_once(&cli, &config);
    }

    let log_path = init_file_tracing(&config.logging)?;
    tracing::debug!("Logging to {}", log_path.display());

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    runtime::run(&config, tokio_runtime.handle()).context("Terminal UI failed")?;
    Ok(())
}

fn print_once(cli: &Cli, config: &Config) -> Result<()> {
    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let output = print_output(&text, config.defaults.mode, cli.json)
        .map_err(|err| anyhow::anyhow!("{}. {}", err, err.detail()))?;
    println!("{output}");
    Ok(())
}
