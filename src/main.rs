//! PeoplePick CLI
//!
//! Interactive picker plus non-interactive search and listing of the people dataset.

use clap::{Parser, Subcommand};
use console::style;
use peoplepick::{describe_person, AppConfig, PeopleDirectory, Person, PickerError};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// PeoplePick - choose a person by typing part of their name
#[derive(Parser)]
#[command(name = "peoplepick")]
#[command(author = "PeoplePick Contributors")]
#[command(version)]
#[command(about = "Terminal autocomplete picker for people", long_about = None)]
struct Cli {
    /// JSON file with people (defaults to the built-in dataset)
    #[arg(short, long, global = true)]
    people: Option<PathBuf>,

    /// Log file (defaults to peoplepick.log in the temp directory)
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a person interactively (default)
    Pick {
        /// Milliseconds of typing inactivity before the query is applied
        #[arg(short, long, default_value = "300")]
        delay: u64,

        /// Output format for the chosen person (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Print people whose name contains a query
    Search {
        /// Part of the name (use -- before the query if it starts with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Maximum results
        #[arg(short, long, default_value = "100")]
        max: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Print everyone in the dataset
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> peoplepick::Result<Self> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PickerError::InvalidOutputFormat(other.to_string())),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let mut config = AppConfig {
        people_path: cli.people,
        log_path: cli.log,
        ..Default::default()
    };

    // Initialize logging
    peoplepick::logging::init(config.log_path.as_deref());
    peoplepick::logging::info("MAIN", "PeoplePick starting up");

    let command = cli.command.unwrap_or(Commands::Pick {
        delay: config.delay.as_millis() as u64,
        output: "text".to_string(),
    });

    let result = match command {
        Commands::Pick { delay, output } => {
            config.delay = Duration::from_millis(delay);
            cmd_pick(&config, &output)
        }

        Commands::Search { query, max, output } => {
            config.max_results = max;
            cmd_search(&config, &query, &output)
        }

        Commands::List { output } => cmd_list(&config, &output),
    };

    if let Err(e) = result {
        peoplepick::logging::error("MAIN", &e.to_string());
        eprintln!("{} {}", style("Error:").red().bold(), e);
        if e.is_data_error() {
            eprintln!(
                "{}",
                style("Check the --people file: a JSON array of {name, sex, slug}").dim()
            );
        }
        std::process::exit(1);
    }
}

/// Interactive pick command implementation
fn cmd_pick(config: &AppConfig, output: &str) -> peoplepick::Result<()> {
    let format = OutputFormat::parse(output)?;
    let directory = PeopleDirectory::load(config.people_path.as_deref())?;

    let chosen = peoplepick::tui::run(directory, config)?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&chosen)?),
        OutputFormat::Text => match chosen {
            Some(person) => println!(
                "{} {}",
                style("✓").green().bold(),
                style(describe_person(&person)).cyan()
            ),
            None => println!("{}", style("No person chosen").dim()),
        },
    }

    Ok(())
}

/// Search command implementation
fn cmd_search(config: &AppConfig, query: &str, output: &str) -> peoplepick::Result<()> {
    let format = OutputFormat::parse(output)?;
    let directory = PeopleDirectory::load(config.people_path.as_deref())?;

    let start = Instant::now();
    let results: Vec<Person> = directory
        .filter(query)
        .into_iter()
        .take(config.max_results)
        .collect();

    if format == OutputFormat::Json {
        println!("{}", to_json(&results)?);
        return Ok(());
    }

    println!(
        "{} Searching for '{}' in {} people",
        style("→").cyan().bold(),
        style(query.trim()).yellow(),
        directory.len()
    );
    println!();

    if results.is_empty() {
        println!("  {}", style("No matching suggestions").red());
        return Ok(());
    }

    println!(
        "Found {} results in {:.2}ms:",
        style(results.len()).green(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    println!();
    print_people(&results);

    Ok(())
}

/// List command implementation
fn cmd_list(config: &AppConfig, output: &str) -> peoplepick::Result<()> {
    let format = OutputFormat::parse(output)?;
    let directory = PeopleDirectory::load(config.people_path.as_deref())?;

    match format {
        OutputFormat::Json => println!("{}", to_json(directory.people())?),
        OutputFormat::Text => {
            println!(
                "{} {} people",
                style("→").cyan().bold(),
                style(directory.len()).green()
            );
            println!();
            print_people(directory.people());
        }
    }

    Ok(())
}

fn print_people(people: &[Person]) {
    for (i, person) in people.iter().enumerate() {
        let name = if person.is_female() {
            style(&person.name).red()
        } else {
            style(&person.name).blue()
        };
        println!(
            "  {} {} {}",
            style(format!("{:3}.", i + 1)).dim(),
            name,
            style(&person.slug).dim()
        );
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> peoplepick::Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| PickerError::json("<stdout>", e))
}
