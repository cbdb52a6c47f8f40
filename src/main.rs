use clap::Parser;
use credvault::cli::commands::edit::EditArgs;
use credvault::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Env var controlling log verbosity (e.g. `CREDVAULT_LOG=debug`).
const LOG_ENV: &str = "CREDVAULT_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref label,
            ref platforms,
        } => credvault::cli::commands::add::execute(&cli, label, platforms),
        Commands::List => credvault::cli::commands::list::execute(&cli),
        Commands::Show { ref label } => credvault::cli::commands::show::execute(&cli, label),
        Commands::Search { ref query } => credvault::cli::commands::search::execute(&cli, query),
        Commands::Expired => credvault::cli::commands::expired::execute(&cli),
        Commands::Verify { ref label } => credvault::cli::commands::verify::execute(&cli, label),
        Commands::Edit {
            ref label,
            ref new_label,
            new_password,
            ref platforms,
            clear_platforms,
        } => {
            let args = EditArgs {
                new_label: new_label.as_deref(),
                new_password,
                platforms,
                clear_platforms,
            };
            credvault::cli::commands::edit::execute(&cli, label, &args)
        }
        Commands::Delete { ref label, force } => {
            credvault::cli::commands::delete::execute(&cli, label, force)
        }
        Commands::Clear { force } => credvault::cli::commands::clear::execute(&cli, force),
        Commands::Version => credvault::cli::commands::version::execute(),
        Commands::Completions { ref shell } => {
            credvault::cli::commands::completions::execute(shell)
        }
        #[cfg(feature = "audit-log")]
        Commands::Audit { last, ref since } => {
            credvault::cli::commands::audit_cmd::execute(&cli, last, since.as_deref())
        }
        #[cfg(not(feature = "audit-log"))]
        Commands::Audit { .. } => Err(credvault::errors::CredVaultError::CommandFailed(
            "audit log not compiled in; rebuild with the `audit-log` feature".into(),
        )),
    };

    if let Err(e) = result {
        credvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
