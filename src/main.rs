use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use graphite::analysis::validate_text;
use graphite::output::terminal;
use graphite::scoring::compare::compare_texts;
use graphite::scoring::describe::describe;
use graphite::scoring::style::score_text;

/// Graphite: personality trait estimation from writing style.
///
/// Estimates Big-Five-style trait scores from surface features of a text
/// (punctuation, capitalization, vocabulary, sentence length) and compares
/// two texts for compatibility.
#[derive(Parser)]
#[command(name = "graphite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text and print its personality profile
    Analyze {
        /// The text to analyze (reads stdin when neither this nor --file is given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Compare two texts for compatibility
    Compare {
        /// First text
        text1: Option<String>,

        /// Second text
        text2: Option<String>,

        /// Read the first text from a file
        #[arg(long)]
        file1: Option<PathBuf>,

        /// Read the second text from a file
        #[arg(long)]
        file2: Option<PathBuf>,
    },

    /// Run the web dashboard and JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: GRAPHITE_PORT or 3000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: GRAPHITE_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("graphite=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { text, file } => {
            let text = read_input(text, file.as_deref())?;
            validate_text(&text)?;

            let scores = score_text(&text);
            let descriptions = describe(&scores);
            terminal::display_profile(&scores, &descriptions, &text);
        }

        Commands::Compare {
            text1,
            text2,
            file1,
            file2,
        } => {
            let text1 = resolve_side(text1, file1.as_deref(), "first")?;
            let text2 = resolve_side(text2, file2.as_deref(), "second")?;
            validate_text(&text1)?;
            validate_text(&text2)?;

            let result = compare_texts(&text1, &text2);
            terminal::display_comparison(&result);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = graphite::config::Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            graphite::web::run_server(&config).await?;
        }
    }

    Ok(())
}

/// Resolve the analyze input: --file wins, then the positional text, then
/// stdin read to EOF.
fn read_input(text: Option<String>, file: Option<&std::path::Path>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf)
}

/// Resolve one side of a comparison: its --file flag wins over the
/// positional text; one of the two must be present.
fn resolve_side(
    text: Option<String>,
    file: Option<&std::path::Path>,
    which: &str,
) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    text.with_context(|| format!("missing {which} text: pass it as an argument or via --file"))
}
