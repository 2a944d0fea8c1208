mod config;

use chrono::Local;
use clap::Parser;
use motiva_quotes::{Quote, QuotePipeline};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;

#[derive(Parser)]
#[command(name = "motiva", about = "Print a daily motivational quote", version)]
struct Cli {
    /// Use the shorter refresh deadline instead of the cold-load one
    #[arg(long)]
    refresh: bool,

    /// Fetch several quotes instead of one
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Probe the primary endpoint and exit
    #[arg(long)]
    check: bool,
}

fn init_tracing() {
    let log_format = std::env::var("MOTIVA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn print_date_header() {
    println!("{}", Local::now().format("%A, %B %d, %Y"));
}

fn print_quote(quote: &Quote) {
    println!();
    println!("\"{}\"", quote.text);
    println!("   - {}  [{}]", quote.author, quote.category);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing();

    let pipeline = QuotePipeline::new(&config.quotes);

    if cli.check {
        let online = pipeline.check_connectivity().await;
        println!("{}", if online { "online" } else { "offline" });
        return Ok(());
    }

    print_date_header();

    if let Some(count) = cli.count {
        for quote in pipeline.resolve_many(count).await {
            print_quote(&quote);
        }
        return Ok(());
    }

    let deadline = if cli.refresh {
        pipeline.refresh_deadline()
    } else {
        pipeline.initial_load_deadline()
    };

    let (quote, diagnostics) = pipeline.resolve_quote_with_diagnostics(deadline).await;
    tracing::info!("Resolution path: {}", diagnostics.summary());
    print_quote(&quote);

    if diagnostics.used_fallback() {
        println!();
        println!("(offline: showing a saved quote)");
    }

    Ok(())
}
