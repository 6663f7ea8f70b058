use clap::{Parser, Subcommand};
use preset_core::{config::Config, BoundingBox, Catalog, TermIndex};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "preset-search", about = "Search map features by name: prints Overpass QL")]
struct Cli {
    /// Write debug logs to /tmp/preset-search-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Preset catalog (iD tagging schema `presets.json`). Needs --translations.
    #[arg(long, global = true, requires = "translations")]
    presets: Option<PathBuf>,

    /// Translation file for the catalog (e.g. `translations/en.json`).
    #[arg(long, global = true, requires = "presets")]
    translations: Option<PathBuf>,

    /// Locale key inside the translation file.
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile the query for a search term.
    Query {
        /// Search term, e.g. `light rail station`.
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,

        /// south,west,north,east in decimal degrees.
        #[arg(long, allow_hyphen_values = true)]
        bbox: Option<String>,
    },
    /// List recognized terms.
    Terms {
        /// Only terms starting with this prefix.
        #[arg(long)]
        prefix: Option<String>,

        /// Maximum number of completions printed with --prefix.
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/preset-search-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("preset-search debug log started: tail -f /tmp/preset-search-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config: falling back to defaults");
        Config::defaults()
    });
    if cli.presets.is_some() {
        config.catalog.presets = cli.presets;
        config.catalog.translations = cli.translations;
    }
    if let Some(locale) = cli.locale {
        config.catalog.locale = locale;
    }

    let catalog = Catalog::load(&config.catalog)?;
    let index = TermIndex::from_catalog(&catalog);

    match cli.command {
        Command::Query { term, bbox } => {
            let term = term.join(" ");
            let bbox = bbox
                .map(BoundingBox::verbatim)
                .unwrap_or_else(|| config.search.bbox());
            match index.lookup(&term, &bbox) {
                Some(query) => println!("{query}"),
                None => {
                    eprintln!("unknown term: {term:?} (try `preset-search terms --prefix ...`)");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Terms { prefix, limit } => {
            let terms = match prefix {
                Some(prefix) => {
                    index.complete(&prefix, limit.unwrap_or(config.search.completion_limit))
                }
                None => index.terms(),
            };
            for term in terms {
                println!("{term}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
