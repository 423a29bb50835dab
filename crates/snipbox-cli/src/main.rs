//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use snipbox_cli::{Cli, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info,snipbox=debug" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let database = cli.database;
    match command {
        Commands::Serve(args) => handlers::serve::execute(args, &database).await?,
        Commands::User(user_command) => {
            handlers::user::execute(&bootstrap(&database).await?, user_command).await?;
        }
        Commands::Token(token_command) => {
            handlers::token::execute(&bootstrap(&database).await?, token_command).await?;
        }
        Commands::Browse { search, language } => {
            handlers::browse::execute(&bootstrap(&database).await?, &search, &language).await?;
        }
    }

    Ok(())
}
