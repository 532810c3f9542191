// Entrypoint for the CLI application.
// - Keeps `main` small: parse options, build the client and hand it to the
//   session runner.
// - Exit status 1 only when the Ollama server cannot be reached.

use bali_itinerary::{
    api::OllamaClient,
    config::Config,
    logger,
    ui::{Outcome, Session, TerminalPrompter},
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!("config: {:?}", config);

    let api = OllamaClient::from_config(&config)?;
    let stdout = std::io::stdout();
    let mut session = Session::new(&api, TerminalPrompter, stdout.lock());

    match session.run()? {
        Outcome::Unreachable => Ok(ExitCode::from(1)),
        Outcome::Finished => Ok(ExitCode::SUCCESS),
    }
}
