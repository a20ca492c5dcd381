use clap::Parser;
use coachlog::application::{
    init, list_entries, mood_history, write_entry, CoachingService, ConfigService, GoalService,
    InitOptions, WriteEntryService,
};
use coachlog::cli::{
    format_analysis, format_checkins, format_coaching, format_entry_list, format_goal_list, Cli,
    Commands, GoalCommands,
};
use coachlog::error::CoachError;
use coachlog::infrastructure::{CoachRepository, FileSystemRepository};

fn main() {
    coachlog::logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CoachError> {
    match cli.command {
        Some(Commands::Init { path, name, demo }) => init(&path, InitOptions { name, demo }),
        Some(Commands::Write { text, mood }) => {
            let repo = FileSystemRepository::discover()?;
            let service = WriteEntryService::new(repo);
            let record = service.execute(&text, mood)?;
            println!("Saved entry #{} (mood {})", record.id, record.mood);
            print!("{}", format_analysis(&record.analysis()));
            Ok(())
        }
        Some(Commands::Journal { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let entries = list_entries(&repo, limit)?;
            print_block(&format_entry_list(&entries));
            Ok(())
        }
        Some(Commands::Analyze { text }) => {
            // Use the journal's keyword limit when run inside one
            let repo = FileSystemRepository::discover().ok();
            let analysis = write_entry::preview(repo.as_ref(), &text)?;
            print!("{}", format_analysis(&analysis));
            Ok(())
        }
        Some(Commands::Goal { command }) => {
            let repo = FileSystemRepository::discover()?;
            let service = GoalService::new(repo);
            match command {
                GoalCommands::Add { title, progress } => {
                    let goal = service.add(&title, progress)?;
                    println!("Added goal #{}: {}", goal.id, goal.title);
                }
                GoalCommands::Update {
                    id,
                    progress,
                    status,
                } => {
                    let goal = service.update(id, progress, &status)?;
                    println!(
                        "Updated goal #{}: {}% [{}]",
                        goal.id, goal.progress, goal.status
                    );
                }
                GoalCommands::List => {
                    print_block(&format_goal_list(&service.list()?));
                }
            }
            Ok(())
        }
        Some(Commands::Checkins) => {
            let repo = FileSystemRepository::discover()?;
            print_block(&format_checkins(&mood_history(&repo)?));
            Ok(())
        }
        Some(Commands::Coach { seed }) => {
            let repo = FileSystemRepository::discover()?;
            let name = repo.load_config()?.name;
            let report = CoachingService::new(repo).execute(seed)?;
            println!("Hi {}!", name);
            print!("{}", format_coaching(&report));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("name = {}", config.name);
                println!("keyword_limit = {}", config.keyword_limit);
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
                println!("Usage: coach config [--list | <key> [<value>]]");
                println!("Valid keys: name, keyword_limit, created");
                Ok(())
            }
        }
        None => {
            println!("coach - Mood journal with rule-based coaching");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Print formatted output, ending with exactly one newline
fn print_block(text: &str) {
    println!("{}", text.trim_end_matches('\n'));
}
