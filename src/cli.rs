use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vocab-extract")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert a bilingual vocabulary workbook into a JSON word list")]
#[command(
    long_about = "vocab-extract reads the level, verb, Destination, and phrasal-verb sheets of an \
                  English-Uzbek vocabulary workbook and writes every word/translation pair, with \
                  its level and category, to a single JSON document."
)]
#[command(after_help = "EXAMPLES:\n  \
    vocab-extract\n  \
    vocab-extract words.xlsx --output public/data.json\n  \
    vocab-extract words.xlsx --pretty --verbose\n  \
    vocab-extract --config my-sheets.toml --dry-run")]
pub struct Cli {
    /// Vocabulary workbook (.xlsx, .xls, .xlsb, .ods)
    pub workbook: Option<PathBuf>,

    /// Output JSON file (defaults to data.json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Indent the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Output format for console messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without executing)
    #[arg(long, help = "List the sheets that would be read without writing output")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_workbook(self.workbook.clone())
            .with_output(self.output.clone())
            .with_pretty(self.pretty)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Default `env_logger` filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_arguments() {
        let cli = Cli::try_parse_from(["vocab-extract"]).unwrap();
        assert!(cli.workbook.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.pretty);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_parse_full_arguments() {
        let cli = Cli::try_parse_from([
            "vocab-extract",
            "words.xlsx",
            "-o",
            "out.json",
            "--pretty",
            "-vv",
            "--output-format",
            "plain",
        ])
        .unwrap();

        assert_eq!(cli.workbook, Some(PathBuf::from("words.xlsx")));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(cli.pretty);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_filter(), "debug");
        assert!(matches!(cli.output_format, OutputFormat::Plain));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["vocab-extract", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_overrides_applied_to_config() {
        let cli = Cli::try_parse_from(["vocab-extract", "words.xlsx", "--pretty"]).unwrap();
        let overrides = cli.create_cli_overrides();
        let mut config = Config::default();
        config.merge_with_cli_args(&overrides);

        assert_eq!(config.input.workbook, PathBuf::from("words.xlsx"));
        assert!(config.output.pretty);
    }

    #[test]
    fn test_quiet_log_filter() {
        let cli = Cli::try_parse_from(["vocab-extract", "--quiet"]).unwrap();
        assert_eq!(cli.log_filter(), "error");
        assert_eq!(cli.verbosity_level(), 0);
    }
}
