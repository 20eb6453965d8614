use clap::Parser;
use dexgate::cli::{self, Cli, Commands};
use dexgate::config::{AppConfig, LoggingConfig};
use dexgate::error::Result;
use dexgate::gate::MessageGate;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = AppConfig::load_from(&cli.config)?;
    init_logging(&config.logging);

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!("config: {}", e);
        }
        return Ok(ExitCode::from(2));
    }

    match &cli.command {
        Commands::Validate { input, json } => {
            let gate = MessageGate::new(config.protocol);
            let verdict = cli::validate_input(&gate, input)?;
            if *json {
                println!("{}", verdict.to_json());
            } else {
                println!("{}", verdict);
            }
            if verdict.is_admitted() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Subaccount { address, index } => {
            let id = cli::subaccount_of(address, *index, &config.protocol)?;
            println!("{}", id);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Owner { subaccount_id } => {
            let owner = cli::owner_of(subaccount_id, &config.protocol)?;
            println!("{}", owner);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dexgate={}", logging.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let _ = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
