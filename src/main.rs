use anyhow::Result;
use clap::Parser;

use anuvad::cli::commands::{configure, interactive, translate};
use anuvad::cli::{Args, Command};
use anuvad::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet));

    match args.command {
        Some(Command::Configure) => {
            configure::run_configure()?;
        }
        Some(Command::Interactive {
            to,
            endpoint,
            model,
        }) => {
            let options = interactive::InteractiveOptions {
                to,
                endpoint,
                model,
            };
            interactive::run_interactive(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                to: args.to,
                endpoint: args.endpoint,
                model: args.model,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
