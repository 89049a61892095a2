use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use commands::{handle_check, handle_history, handle_questions, handle_report, handle_scan};
use services::config::{load_config, CheckOverrides};

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    // .env may carry OPENAI_API_KEY, so load it before clap reads the environment
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            images_dir,
            backend,
            output,
            model,
            api_base,
            endpoint,
            api_key,
            max_tokens,
            temperature,
            timeout_secs,
            compliant_when,
        } => {
            let config = load_config(cli.config.as_deref())?;
            handle_check(
                cli.json,
                &config,
                CheckOverrides {
                    images_dir,
                    backend,
                    output,
                    model,
                    api_base,
                    endpoint,
                    api_key,
                    max_tokens,
                    temperature,
                    timeout_secs,
                    compliant_when,
                },
            )?;
        }
        Commands::Questions => handle_questions(cli.json)?,
        Commands::Scan { images_dir } => {
            let config = load_config(cli.config.as_deref())?;
            handle_scan(cli.json, &config, images_dir)?;
        }
        Commands::Report { path } => handle_report(cli.json, &path)?,
        Commands::History => handle_history(cli.json)?,
    }

    Ok(())
}
