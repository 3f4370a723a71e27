use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "qna")]
#[command(about = "Interactive Q&A CLI with on-demand answer translation")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure service endpoints, API keys and region
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported translation target languages
    Languages,
}
