//! herdscore CLI - Body-condition scoring station by station

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use herdscore::cli::{commands, Cli, Commands, LogTarget};
use herdscore::config::{load_config, ConfigOverrides};
use herdscore::errors::to_exit_code;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli) {
        eprintln!("Error: cannot open log file: {}", e);
        std::process::exit(1);
    }

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

/// Install the subscriber for this invocation's [`LogTarget`].
fn init_tracing(cli: &Cli) -> io::Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()))
    };

    match cli.log_target() {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(filter())
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter())
            .with(fmt::layer().with_writer(io::stderr))
            .init(),
        LogTarget::Off => {}
    }
    Ok(())
}

fn run(cli: Cli) -> herdscore::Result<()> {
    match cli.selected_command() {
        Commands::Run => {
            let overrides = ConfigOverrides {
                max_station: cli.max_station,
                export_dir: cli.export_dir.clone(),
            };
            let config = load_config(cli.config.as_deref(), &overrides)?;
            commands::run::run(&config)
        }
        Commands::InitConfig { force } => {
            let path = commands::init_config::run(cli.config.as_deref(), force)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        Commands::Scores => commands::scores::run(&mut io::stdout().lock()),
    }
}
