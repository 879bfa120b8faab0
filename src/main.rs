use chrono::NaiveDate;
use clap::Parser;
use weeklog::application::{
    export_to_dir, export_to_file, import_file, init::init, ConfigService, EntryStore,
};
use weeklog::cli::{format_entry_list, format_import_summary, Cli, Commands};
use weeklog::domain::week_range;
use weeklog::error::WeeklogError;
use weeklog::infrastructure::logging::init_logging;
use weeklog::infrastructure::{Clock, FileSystemRepository, LogRepository, SystemClock};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), WeeklogError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized weekly log at {}", path.display());
            Ok(())
        }
        Commands::Add { content, date } => {
            // Callers must not submit blank entries
            if content.trim().is_empty() {
                return Err(WeeklogError::EmptyContent);
            }

            let date = date.as_deref().map(parse_date).transpose()?;

            let repo = FileSystemRepository::discover()?;
            let mut store = EntryStore::open(repo.snapshot());
            let date = date.unwrap_or_else(|| store.today());
            let entry = store.create(&content, &date.format("%Y-%m-%d").to_string())?;

            println!("Saved entry for {} [{}]", entry.week_range, entry.id);
            Ok(())
        }
        Commands::Edit { id, content } => {
            if content.trim().is_empty() {
                return Err(WeeklogError::EmptyContent);
            }

            let repo = FileSystemRepository::discover()?;
            let mut store = EntryStore::open(repo.snapshot());

            if store.update(&id, &content)? {
                println!("Updated entry [{}]", id);
            } else {
                println!("No entry with id '{}'", id);
            }
            Ok(())
        }
        Commands::List { limit } => {
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::open(repo.snapshot());

            let shown = limit.unwrap_or(store.len()).min(store.len());
            let output = format_entry_list(&store.entries()[..shown], store.len());
            println!("{}", output.trim_end());
            Ok(())
        }
        Commands::Export { output } => {
            let repo = FileSystemRepository::discover()?;
            let store = EntryStore::open(repo.snapshot());

            let path = match output {
                Some(destination) => export_to_file(&store, &destination)?,
                None => export_to_dir(&store, &repo.load_config()?.export_dir(repo.root())?)?,
            };
            println!("Exported {} entries to {}", store.len(), path.display());
            Ok(())
        }
        Commands::Import { file } => {
            let repo = FileSystemRepository::discover()?;
            let mut store = EntryStore::open(repo.snapshot());

            let summary = import_file(&mut store, &file)?;
            println!("{}", format_import_summary(&summary));
            Ok(())
        }
        Commands::Week { date } => {
            let date = match date {
                Some(input) => parse_date(&input)?,
                None => SystemClock.today(),
            };
            println!("{}", week_range(date));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!(
                    "export_dir = {}",
                    config
                        .export_dir
                        .map(|dir| dir.display().to_string())
                        .unwrap_or_default()
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: weeklog config [--list | <key> [<value>]]");
                println!("Valid keys: export_dir, created");
                Ok(())
            }
        }
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, WeeklogError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| WeeklogError::InvalidDate(input.to_string()))
}
