use cli::Cli;
use error::Error;

mod cli;
mod config;
mod emit;
mod error;
mod init;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli: Cli = clap::Parser::parse();

    match cli.command {
        cli::Commands::Init { output, force } => {
            init::generate_config_file(&output, force).await?;
        }
        cli::Commands::Emit {
            config,
            output,
            verbose,
        } => {
            let config = config::load_config_from_file(&config).await?;
            emit::run_emit(config, output.as_deref(), verbose).await?;
        }
    }

    Ok(())
}
