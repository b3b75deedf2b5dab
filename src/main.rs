mod cli;
mod dataset;
mod error;
mod exporter;
mod fmt;
mod loader;
mod models;
mod reports;
mod settings;

use clap::Parser;

use cli::{Cli, Commands, ReportCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { file, currency } => cli::init::run(file, currency),
        Commands::Status { file } => cli::status::run(file),
        Commands::Report { command } => match command {
            ReportCommands::Summary {
                file,
                from_date,
                to_date,
                category,
                status,
            } => cli::report::summary(file, from_date, to_date, category, status),
            ReportCommands::Trend {
                file,
                from_date,
                to_date,
                category,
                status,
            } => cli::report::trend(file, from_date, to_date, category, status),
            ReportCommands::Categories {
                file,
                from_date,
                to_date,
                category,
                status,
            } => cli::report::categories(file, from_date, to_date, category, status),
            ReportCommands::Cities {
                file,
                from_date,
                to_date,
                category,
                status,
                top,
            } => cli::report::cities(file, from_date, to_date, category, status, top),
            ReportCommands::Fulfilment {
                file,
                from_date,
                to_date,
                category,
                status,
            } => cli::report::fulfilment(file, from_date, to_date, category, status),
            ReportCommands::Orders {
                file,
                from_date,
                to_date,
                category,
                status,
                limit,
            } => cli::report::orders(file, from_date, to_date, category, status, limit),
            ReportCommands::All {
                file,
                from_date,
                to_date,
                category,
                status,
            } => cli::report::all(file, from_date, to_date, category, status),
        },
        Commands::Export {
            file,
            from_date,
            to_date,
            category,
            status,
            output,
        } => cli::export::run(file, from_date, to_date, category, status, output),
        Commands::Demo { output, months } => cli::demo::run(output, months),
        Commands::Completions { shell } => cli::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
