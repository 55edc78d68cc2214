use clap::{Parser, Subcommand};

use crate::translation::Language;

#[derive(Parser, Debug)]
#[command(name = "anuvad")]
#[command(about = "English/Nepali translation CLI powered by LLM endpoints")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Target language (detected from the input if not given)
    #[arg(short = 't', long = "to", value_enum)]
    pub to: Option<Language>,

    /// API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Suppress status output on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit default settings
    Configure,
    /// Interactive translation session
    Interactive {
        /// Target language (detected from each input if not given)
        #[arg(short = 't', long = "to", value_enum)]
        to: Option<Language>,

        /// API endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
}
