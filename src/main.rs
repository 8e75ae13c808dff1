use clap::Parser;
use contactvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => contactvault::cli::commands::init::execute(&cli),
        Commands::Tree => contactvault::cli::commands::tree::execute(&cli),
        Commands::Mkdir {
            ref name,
            ref parent,
        } => contactvault::cli::commands::mkdir::execute(&cli, name, parent.as_deref()),
        Commands::Add { ref folder } => {
            contactvault::cli::commands::add::execute(&cli, folder.as_deref())
        }
        Commands::List { ref folder } => {
            contactvault::cli::commands::list::execute(&cli, folder.as_deref())
        }
        Commands::Reset { force } => contactvault::cli::commands::reset::execute(&cli, force),
    };

    if let Err(e) = result {
        contactvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
