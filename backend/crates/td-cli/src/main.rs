//! tonedown - tinnitus questionnaire CLI
//!
//! # Examples
//!
//! ```bash
//! # Walk through a full pass
//! tonedown survey
//!
//! # Onboard without the wizard
//! tonedown profile set --name Ana --age 34 --sex f
//!
//! # Rate the chosen intervention
//! tonedown feedback 4 --server http://127.0.0.1:5000
//! ```

use td_cli::{Backend, Cli, CliResult, Commands, Questionnaire, execute, logger};
use td_client::Client;
use td_config::Config;
use td_store::{FileStore, KeyValueStore, MemoryStore, SessionStore};

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let client = Client::new(&config.api.base_url, config.api.timeout())?;

    if cli.ephemeral {
        info!("Session store: in memory");
        let session = SessionStore::new(MemoryStore::new());
        let questionnaire = Questionnaire::new(session, client, config.api.mock_analysis);
        dispatch(cli.command, questionnaire, cli.pretty).await
    } else {
        let store = FileStore::open(config.storage_path()?)?;
        info!("Session store: {}", store.path().display());
        let session = SessionStore::new(store);
        let questionnaire = Questionnaire::new(session, client, config.api.mock_analysis);
        dispatch(cli.command, questionnaire, cli.pretty).await
    }
}

async fn dispatch<S: KeyValueStore, B: Backend>(
    command: Commands,
    mut questionnaire: Questionnaire<S, B>,
    pretty: bool,
) -> CliResult<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout().lock();

    execute(command, &mut questionnaire, &mut input, &mut out, pretty).await?;
    out.flush()?;
    Ok(())
}

