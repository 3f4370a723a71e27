use anyhow::Result;
use clap::Parser;

use qna_cli::cli::commands::{ask, configure};
use qna_cli::cli::{Args, Command};
use qna_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            ask::run_ask().await?;
        }
    }

    Ok(())
}
