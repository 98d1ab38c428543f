mod app;
mod cli;
mod commands;
mod config;
mod format;
mod input;
mod loader;
mod logging;
mod ui;

use clap::Parser;
use color_eyre::eyre::Result;

use cli::{Cli, Commands};
use config::{ensure_dirs, LogLevel, UserConfig};
use loader::PayloadSource;
use logging::LogMode;

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = ensure_dirs();

    let cli = Cli::parse();
    let config = UserConfig::load();
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);

    match cli.command {
        Some(Commands::Show {
            source,
            json,
            compact,
        }) => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::show::run(source.as_deref(), json, compact, &config)
        }
        Some(Commands::Ui { source }) => {
            let _guard = logging::init(config.log_level, LogMode::File, log_level_override);
            app::run_tui(PayloadSource::resolve(source.as_deref(), &config))
        }
        Some(Commands::Collect {
            output_dir,
            report_path,
            json_output,
        }) => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::collect::run(output_dir, report_path, json_output, &config)
        }
        Some(Commands::Config { path, reset, edit }) => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::config::run(path, reset, edit)
        }
        None => {
            let _guard = logging::init(config.log_level, LogMode::Stderr, log_level_override);
            commands::show::run(None, false, false, &config)
        }
    }
}
