use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jougen")]
#[command(version = "0.1.0")]
#[command(about = "Fluent batch-evaluation journal generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Init {
        #[arg(short, long, default_value = "jougen.json")]
        output: String,
        #[arg(short, long, default_value = "false")]
        force: bool,
    },

    /// Emit a journal to stdout (or to a file with --output)
    #[command(visible_alias = "e")]
    Emit {
        #[arg(short, long, default_value = "jougen.json")]
        config: String,
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, default_value_t = false)]
        verbose: bool,
    },
}
