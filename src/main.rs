mod catalog;
mod commands;
mod config;
mod pagination;
mod ui;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

/// bgrecs - browse board-game recommendations page by page
#[derive(Parser)]
#[command(name = "bgrecs")]
#[command(version = "0.1.0")]
#[command(about = "Browse board-game recommendations page by page", long_about = None)]
struct Cli {
    /// Recommendations JSON file (defaults to settings, then the bundled sample)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Games per page (defaults to settings)
    #[arg(short = 'n', long, global = true)]
    per_page: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of recommendations
    #[command(alias = "l")]
    List {
        /// Page to print (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Print the page count and page ids
    #[command(alias = "p")]
    Pages,

    /// Print a single game
    #[command(alias = "s")]
    Show {
        /// Game id
        id: String,
    },
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Logs go to a file so they never land on the alternate screen
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(file) = log_file() {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}

/// `bgrecs.log` under the cache directory, apart from the settings
fn log_path() -> Option<PathBuf> {
    Some(dirs::cache_dir()?.join("bgrecs").join("bgrecs.log"))
}

fn log_file() -> Option<File> {
    let path = log_path()?;
    fs::create_dir_all(path.parent()?).ok()?;
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = config::load_settings();

    // Page size is fixed for the session; reject bad values before anything renders
    let page_size = settings.page_size(cli.per_page)?;
    let path = cli.file.or_else(|| settings.recommendations_file.clone());
    let source = catalog::source_for(path.as_deref());
    log::debug!("source: {}, {} per page", source.describe(), page_size.get());

    match cli.command {
        Some(cmd) => match cmd {
            Commands::List { page } => {
                commands::ListCommand::execute(source.as_ref(), page_size, page)?;
            }
            Commands::Pages => {
                commands::PagesCommand::execute(source.as_ref(), page_size)?;
            }
            Commands::Show { id } => {
                commands::ShowCommand::execute(source.as_ref(), &id)?;
            }
        },
        None => {
            // No command provided - start the interactive browser
            ui::Shell::new(source, page_size, settings)?.run()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_reach_subcommands() {
        let cli = Cli::try_parse_from(["bgrecs", "list", "--page", "3", "-n", "5", "--file", "games.json"]).unwrap();
        assert_eq!(cli.per_page, Some(5));
        assert_eq!(cli.file, Some(PathBuf::from("games.json")));
        assert!(matches!(cli.command, Some(Commands::List { page: 3 })));
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["bgrecs"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn logs_stay_out_of_the_settings_directory() {
        if let (Some(log), Some(config)) = (log_path(), dirs::config_dir()) {
            assert!(log.ends_with("bgrecs/bgrecs.log"));
            assert!(!log.starts_with(config.join("bgrecs")));
        }
    }
}
