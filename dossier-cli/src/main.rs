//! ipdossier CLI
//!
//! Enriches IP addresses with reachability, geolocation, PTR, RDAP/WHOIS
//! ownership and open-port data; prints a colored table or exports CSV.

mod export;
mod table;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use dossier_core::default_styles;
use dossier_runtime::{targets, Pipeline, PipelineConfig};

#[derive(Parser)]
#[command(name = "ipdossier")]
#[command(author, version, about = "IP enrichment: reachability, geolocation, PTR, ownership, open ports", long_about = None)]
#[command(group = ArgGroup::new("input").required(true).args(["file", "ips"]))]
struct Cli {
    /// File with one IP per line (blank lines ignored)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// IPs given directly, space separated
    #[arg(short, long, num_args = 1..)]
    ips: Vec<String>,

    /// CSV destination; without it the table prints to the terminal
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How many IPs to enrich at once (1 = sequential)
    #[arg(short, long, default_value = "1")]
    concurrency: usize,

    /// Disable terminal colors
    #[arg(long)]
    plain: bool,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let ips = targets::resolve(cli.file.as_deref(), &cli.ips)?;

    let config = PipelineConfig::default().with_concurrency(cli.concurrency);
    let pipeline = Pipeline::new(config)?;
    let records = pipeline.run(&ips).await;

    let styles = default_styles();
    match cli.output {
        Some(path) => {
            if let Err(e) = export::write_csv_file(&path, &records) {
                // The enrichment work is done; show it before surfacing
                // the write failure
                error!("could not write {}: {}", path.display(), e);
                table::print_table(&records, &styles, !cli.plain);
                return Err(e.into());
            }
            println!("Resultados guardados en {}", path.display());
        }
        None => {
            table::print_table(&records, &styles, !cli.plain);
        }
    }

    Ok(())
}
