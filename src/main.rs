use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

mod domain;
mod application;
mod infrastructure;

use application::errors::CliError;
use application::messaging::dispatcher::LineOutcome;
use application::messaging::CommandDispatcher;
use application::services::CommandService;
use infrastructure::adapters::{ConsoleAdapter, HttpBoard};
use infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "youareell")]
#[command(about = "Command-line client for the YouAreEll message board", long_about = None)]
struct Cli {
    /// Enable the interactive console
    #[arg(long)]
    interactive: bool,

    /// Echo every request and response
    #[arg(long)]
    verbose: bool,

    /// Config file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Milliseconds between polls in `watch` (overrides config)
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,

    /// Command and its arguments, e.g. `send ada "hello world" to grace`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        report(&e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stdout().is_terminal())
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "warn,{}={}",
            env!("CARGO_CRATE_NAME"),
            level
        )))
        .init();
}

fn report(error: &CliError) {
    println!("Error: [{}] {}", error.kind(), error);
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Ok(config.with_overrides(cli.base_url.clone(), cli.poll_interval_ms)?)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;
    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let board = HttpBoard::new(&config.server.base_url, config.timeout())?;
    let dispatcher = CommandDispatcher::new(CommandService::new(board, config.poll_interval()));
    tracing::debug!("Using server {}", dispatcher.service().board().base_url());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    let mut stdout = std::io::stdout();
    if !cli.interactive {
        return rt.block_on(dispatcher.dispatch(&cli.command, &mut stdout));
    }

    run_interactive(&rt, &dispatcher, &mut stdout);
    Ok(())
}

/// Read-dispatch loop; errors are printed and the loop carries on
fn run_interactive(rt: &tokio::runtime::Runtime, dispatcher: &CommandDispatcher<HttpBoard>, out: &mut dyn Write) {
    let console = ConsoleAdapter::new();
    tracing::info!("Starting interactive console");

    loop {
        let line = match console.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        };

        match rt.block_on(dispatcher.dispatch_line(&line, out)) {
            Ok(LineOutcome::Exit) => break,
            Ok(LineOutcome::Handled) | Ok(LineOutcome::Skipped) => {}
            Err(e) => report(&e),
        }
    }
}
