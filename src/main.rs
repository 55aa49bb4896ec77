// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rover_search::utils::logging::{format_error, format_info, format_success, format_warning};
use rover_search::{
    Config, DirectoryStore, DocumentStore, HeaderParser, JsonExporter, SearchEngine,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rover_search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Full-text search over a flat directory of documents", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Overrides store.data_dir from the configuration
    #[arg(short, long, value_name = "DIR", env = "ROVER_SEARCH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every document for all query terms
    Search {
        /// Search query text
        query: String,

        #[arg(short, long, value_name = "NUM")]
        limit: Option<usize>,

        /// Also write the results as JSON into this directory
        #[arg(long, value_name = "DIR")]
        json: Option<PathBuf>,
    },

    /// List documents in the store with their parsed headers
    List,

    /// Show how a single file's header is parsed
    Inspect {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(cli.color);
    rover_search::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        info!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            info!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(data_dir) = cli.data_dir {
        config.store.data_dir = data_dir;
    }

    match cli.command {
        Commands::Search { query, limit, json } => {
            cmd_search(&config, &query, limit, json.as_deref())?;
        }
        Commands::List => {
            cmd_list(&config)?;
        }
        Commands::Inspect { file } => {
            cmd_inspect(&config, &file)?;
        }
    }

    Ok(())
}

fn cmd_search(
    config: &Config,
    query: &str,
    limit: Option<usize>,
    json_dir: Option<&Path>,
) -> Result<()> {
    let store = DirectoryStore::from_config(&config.store);
    if !store.is_available() {
        eprintln!(
            "{}",
            format_warning(&format!(
                "Data directory {} does not exist",
                store.root().display()
            ))
        );
    }

    let parser = HeaderParser::with_description_lines(config.search.description_lines);
    let engine = SearchEngine::with_parser(store, parser);
    let results = engine.search(query);

    if let Some(dir) = json_dir {
        let exporter = JsonExporter::new(dir).context("Failed to create export directory")?;
        let path = exporter
            .export(&results, config.output.pretty_json)
            .context("Failed to export results")?;
        println!(
            "{}",
            format_success(&format!("Results written to {}", path.display()))
        );
    }

    if results.is_empty() {
        println!("\nNo results found for query: \"{}\"\n", query);
        println!("Try:");
        println!("  - Using fewer or different search terms");
        println!("  - Checking the data directory: {}", config.store.data_dir.display());
        return Ok(());
    }

    let limit = limit.unwrap_or(config.search.max_results);
    let shown = if limit == 0 {
        results.len()
    } else {
        limit.min(results.len())
    };

    println!("\nSearch Results for: \"{}\"\n", results.query);
    println!(
        "Found {} result(s) in {:.3}ms\n",
        results.len(),
        results.duration.as_secs_f64() * 1000.0
    );
    println!("{}", "=".repeat(80));

    for (idx, result) in results.results.iter().take(shown).enumerate() {
        println!("\n{}. {}", idx + 1, result.format_summary(config.output.preview_chars));
    }

    println!("{}", "=".repeat(80));
    if shown < results.len() {
        println!(
            "{}",
            format_info(&format!("{} more result(s) not shown", results.len() - shown))
        );
    }

    Ok(())
}

fn cmd_list(config: &Config) -> Result<()> {
    let store = DirectoryStore::from_config(&config.store);
    let ids = store
        .document_ids()
        .with_context(|| format!("Cannot list {}", store.root().display()))?;

    let parser = HeaderParser::with_description_lines(config.search.description_lines);

    println!("\n{} document(s) in {}\n", ids.len(), store.root().display());
    for id in &ids {
        match store.load(id) {
            Ok(document) => {
                let header = parser.parse(&document.content);
                println!("{} - {}", document.name, header.title);
                println!("    {}", header.description);
            }
            Err(e) => {
                warn!("Failed to read {}: {}", id.display(), e);
                println!("{}", format_error(&format!("{}: unreadable", id.display())));
            }
        }
    }

    Ok(())
}

fn cmd_inspect(config: &Config, file: &Path) -> Result<()> {
    let content = DirectoryStore::read_file_content(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let parser = HeaderParser::with_description_lines(config.search.description_lines);
    let header = parser.parse(&content);
    let snippet = header.snippet(&content);

    println!("File:          {}", file.display());
    println!("Title:         {}", header.title);
    println!("Description:   {}", header.description);
    println!(
        "Header length: {} of {} bytes",
        header.header_length,
        content.len()
    );
    println!("Snippet:");
    for line in snippet.lines().take(5) {
        println!("     {}", line);
    }

    Ok(())
}
