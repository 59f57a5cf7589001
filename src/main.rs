use chrono::Local;
use clap::Parser;
use grindlog::application::{self, ConfigService};
use grindlog::cli::{output, Cli, Commands, EntryCommand, PatternCommand};
use grindlog::error::GrindlogError;
use grindlog::infrastructure::{FileStore, Repository, Workspace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr so stdout only carries command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "grindlog=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Open the journal's records, warning about collections that had to be reset
fn open_repository() -> Result<(Workspace, Repository<FileStore>), GrindlogError> {
    let workspace = Workspace::discover()?;
    let repository = workspace.open_repository()?;

    for issue in repository.diagnostics() {
        eprintln!(
            "Warning: could not load {} ({}); starting with an empty collection",
            issue.key, issue.message
        );
    }

    Ok((workspace, repository))
}

fn run(cli: Cli) -> Result<(), GrindlogError> {
    match cli.command {
        Commands::Init {
            path,
            weekly_goal,
            monthly_goal,
        } => {
            let config = application::init::init(&path, weekly_goal, monthly_goal)?;
            println!("Initialized grindlog journal at {}", path.display());
            println!(
                "Goals: {} per week, {} per month",
                config.weekly_goal, config.monthly_goal
            );
            Ok(())
        }
        Commands::Pattern { action } => run_pattern(action),
        Commands::Entry { action } => run_entry(action),
        Commands::Log(fields) => run_entry(EntryCommand::Add(fields)),
        Commands::Stats => {
            let (workspace, repository) = open_repository()?;
            let config = workspace.load_config()?;
            let report = application::progress_report(&repository, &config, &Local::now());
            print!("{}", output::format_report(&report));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("weekly_goal = {}", config.weekly_goal);
                println!("monthly_goal = {}", config.monthly_goal);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: grindlog config [--list | <key> [<value>]]");
                println!("Valid keys: weekly_goal, monthly_goal, created");
            }
            Ok(())
        }
    }
}

fn run_pattern(action: PatternCommand) -> Result<(), GrindlogError> {
    let (_, mut repository) = open_repository()?;

    match action {
        PatternCommand::Add(fields) => {
            let pattern = repository.add_pattern(fields.into_draft())?;
            println!("Added pattern {}: {}", pattern.id, pattern.title);
        }
        PatternCommand::List { difficulty } => {
            let patterns = application::list_patterns(&repository, difficulty);
            print!("{}", output::format_pattern_list(&patterns));
            if patterns.is_empty() {
                println!();
            }
        }
        PatternCommand::Show { id } => {
            let pattern = repository.pattern(id).ok_or(GrindlogError::NotFound {
                kind: "Pattern",
                id,
            })?;
            print!("{}", output::format_pattern(pattern));
        }
        PatternCommand::Edit { id, fields } => {
            let edit = fields.into_edit();
            if edit.is_empty() {
                println!("Nothing to change");
                return Ok(());
            }
            let pattern = application::edit_pattern(&mut repository, id, edit)?;
            println!("Updated pattern {}: {}", pattern.id, pattern.title);
        }
        PatternCommand::Delete { id } => {
            if repository.delete_pattern(id)? {
                println!("Deleted pattern {}", id);
            } else {
                println!("No pattern with id {}", id);
            }
        }
    }

    Ok(())
}

fn run_entry(action: EntryCommand) -> Result<(), GrindlogError> {
    let (_, mut repository) = open_repository()?;

    match action {
        EntryCommand::Add(fields) => {
            let entry = repository.add_journal_entry(fields.into_draft())?;
            println!("Logged entry {}: {}", entry.id, entry.title);
        }
        EntryCommand::List { difficulty, limit } => {
            let entries = application::list_entries(&repository, difficulty, limit);
            print!("{}", output::format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
        }
        EntryCommand::Show { id } => {
            let entry = repository.journal_entry(id).ok_or(GrindlogError::NotFound {
                kind: "Journal entry",
                id,
            })?;
            print!("{}", output::format_entry(entry));
        }
        EntryCommand::Edit { id, fields, clear } => {
            let edit = fields.into_edit(&clear);
            if edit.is_empty() {
                println!("Nothing to change");
                return Ok(());
            }
            let entry = application::edit_entry(&mut repository, id, edit)?;
            println!("Updated entry {}: {}", entry.id, entry.title);
        }
        EntryCommand::Delete { id } => {
            if repository.delete_journal_entry(id)? {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
        }
    }

    Ok(())
}
