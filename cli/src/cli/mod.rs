use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print health metrics and advice for a payload (default)
    #[command(alias = "report")]
    Show {
        /// Payload file or http(s) URL (defaults to `payload_path` from config)
        source: Option<String>,

        /// Output insights and payload as JSON
        #[arg(short, long)]
        json: bool,

        /// Compact JSON output (single line)
        #[arg(short, long, requires = "json")]
        compact: bool,
    },

    /// Launch the interactive dashboard
    #[command(alias = "tui")]
    Ui {
        /// Payload file or http(s) URL (defaults to `payload_path` from config)
        source: Option<String>,
    },

    /// Generate a battery report with powercfg and convert it to a payload
    #[command(alias = "agent")]
    Collect {
        /// Directory for the report and JSON output
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Parse an existing battery-report.html instead of generating one
        #[arg(short, long)]
        report_path: Option<PathBuf>,

        /// Name of the JSON output file
        #[arg(short, long)]
        json_output: Option<String>,
    },

    /// Show or edit configuration
    Config {
        /// Print config file path
        #[arg(long)]
        path: bool,

        /// Reset config to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },
}

/// Battery health insights from Windows battery reports
#[derive(Debug, Parser)]
#[command(name = "vitals", version, verbatim_doc_comment)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_url() {
        let cli = Cli::parse_from(["vitals", "show", "https://host/data.json", "--json"]);
        match cli.command {
            Some(Commands::Show { source, json, compact }) => {
                assert_eq!(source.as_deref(), Some("https://host/data.json"));
                assert!(json);
                assert!(!compact);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_collect_alias() {
        let cli = Cli::parse_from([
            "vitals",
            "agent",
            "--report-path",
            "battery-report.html",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Some(Commands::Collect { report_path, .. }) => {
                assert_eq!(report_path, Some(PathBuf::from("battery-report.html")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
