//! exa-research command line host
//!
//! Runs one search for the words given on the command line and prints the
//! result. Status events are written to the log.

use anyhow::Result;
use exa_research::{config, status::TracingNotifier, PaperSearch};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("exa-research {}", exa_research::VERSION);
        return Ok(());
    }

    info!("Starting exa-research v{}", exa_research::VERSION);

    let settings = config::load()?;
    let tool = PaperSearch::new(&settings)?;
    info!("Searching back {} years", tool.settings().years);

    let query = args.join(" ");
    let output = tool.search(&query, &TracingNotifier).await?;
    println!("{}", output);

    Ok(())
}

fn print_usage() {
    println!(
        r#"
exa-research v{}
Search recent research papers with Exa

USAGE:
    exa-research [OPTIONS] <QUERY>...

OPTIONS:
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    EXA_RESEARCH_SETTINGS_PATH  Path to settings.yml
    EXA_API_KEY                 Exa API key
    EXA_YEARS                   Years to search back (default 3)
    EXA_BASE_URL                Exa API base URL
    RUST_LOG                    Log filter (default info)
"#,
        exa_research::VERSION
    );
}
