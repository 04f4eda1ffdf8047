use anyhow::{Context, Result};
use batchwise::input::{parse_values, read_source, render_batches};
use batchwise::logging::init_logging;
use batchwise::{InputFormat, OutputFormat, RunConfig, Strategy, run};
use clap::Parser;
use std::path::PathBuf;

/// Split a list of values into fixed-size batches
#[derive(Debug, Parser)]
#[command(name = "batchwise", version, about)]
struct Cli {
    /// Batch size; zero or negative produces no batches
    #[arg(short, long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Batching flavour to run
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Stop after this many batches
    #[arg(short, long)]
    limit: Option<usize>,

    /// Read values from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    input_format: Option<InputFormat>,

    /// Output layout; in text mode values containing whitespace are JSON-quoted
    #[arg(long, value_enum)]
    output_format: Option<OutputFormat>,

    /// JSON file with default settings; flags win over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }
        if let Some(format) = self.input_format {
            config.input_format = format;
        }
        if let Some(format) = self.output_format {
            config.output_format = format;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.resolve_config().context("Failed to load settings")?;
    tracing::debug!(?config, "resolved settings");

    let text = read_source(cli.input.as_deref())?;
    let values = parse_values(&text, config.input_format).context("Failed to parse input")?;

    let report = run(&values, &config)?;
    if report.stopped_early {
        tracing::info!(limit = config.limit, "output truncated by batch limit");
    }

    let rendered = render_batches(&report.batches, config.output_format);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "batchwise",
            "--size",
            "-2",
            "--strategy",
            "batcher",
            "--limit",
            "4",
            "--output-format",
            "json",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.size, -2);
        assert_eq!(config.effective_size(), 0);
        assert_eq!(config.strategy, Strategy::Batcher);
        assert_eq!(config.limit, Some(4));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.input_format, InputFormat::Lines);
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"size": 4, "strategy": "func", "limit": 1}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["batchwise", "--config", path, "--strategy", "seq"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.size, 4);
        assert_eq!(config.strategy, Strategy::Seq);
        assert_eq!(config.limit, Some(1));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
