use clap::Parser;
use passvault::cli::commands::add::AddArgs;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref site,
            ref login,
            ref password,
            generate,
            length,
            no_symbols,
            force,
        } => passvault::cli::commands::add::execute(
            &cli,
            &AddArgs {
                site,
                login: login.as_deref(),
                password: password.as_deref(),
                generate,
                length,
                no_symbols,
                force,
            },
        ),
        Commands::Get { ref site, copy } => passvault::cli::commands::get::execute(&cli, site, copy),
        Commands::Delete { ref site, force } => {
            passvault::cli::commands::delete::execute(&cli, site, force)
        }
        Commands::List {
            ref filter,
            details,
        } => passvault::cli::commands::list::execute(&cli, filter.as_deref(), details),
        Commands::Generate {
            length,
            count,
            no_symbols,
        } => passvault::cli::commands::generate::execute(&cli, length, count, no_symbols),
        Commands::Backup { ref path } => passvault::cli::commands::backup::execute(&cli, path),
        Commands::Stats => passvault::cli::commands::stats::execute(&cli),
        Commands::Completions { ref shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
