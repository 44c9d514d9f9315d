mod cli;
mod error;
mod list;
mod positions;
mod register;
mod settings;
mod table;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::path::Path;
use std::process;
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
        eprintln!("tracing init failed: {e}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::List { pages, all, json } => list::execute(list::ListArgs {
            config_path: cli.config,
            pages,
            all,
            json,
        }),
        Commands::Positions => positions::execute(&cli.config),
        Commands::Register {
            name,
            email,
            phone,
            position_id,
            photo,
            phone_rule,
        } => register::execute(register::RegisterArgs {
            config_path: cli.config,
            name,
            email,
            phone,
            position_id,
            photo,
            phone_rule: phone_rule.map(Into::into),
        }),
        Commands::Init { force } => init(&cli.config, force),
    };

    if let Err(err) = result {
        ui::error_message(&format!("{} {}", "Error:".bold(), err.user_message()));
        process::exit(1);
    }
}

fn init(config_path: &str, force: bool) -> error::Result<()> {
    ui::section_header("Users client configuration");
    let path = Path::new(config_path);
    if !settings::write_default(path, force)? {
        ui::warning_message(&format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    Ok(())
}
