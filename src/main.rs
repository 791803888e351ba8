use clap::Parser;
use plugconf::cli::{Cli, Commands};
use plugconf::commands;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::init()?,
        Commands::Check { json } => {
            let code = commands::check::check(json)?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Show { path } => commands::show::show(&path)?,
        Commands::Convert { from, to } => commands::convert::convert(&from, &to)?,
        Commands::Formats => commands::formats::formats()?,
    }

    Ok(())
}
