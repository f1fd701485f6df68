//! TLB simulator CLI.

use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;
use std::process;

use tlbsim::config::{self, Config};
use tlbsim::sim::Simulator;
use tlbsim::sim::report::{JsonReport, ReportSink, TextReport};
use tlbsim::sim::trace::TraceReader;

#[derive(Parser, Debug)]
#[command(
    name = "tlbsim",
    author,
    version,
    about = "Page table and LRU TLB simulator",
    long_about = None,
)]
struct Cli {
    /// Access trace: hexadecimal address and decimal size per record.
    trace: PathBuf,

    /// Number of TLB entries (>= 1). Overrides the config file.
    #[arg(allow_hyphen_values = true)]
    tlb_size: Option<String>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the counters as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        // Help and version are not failures.
        process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    if let Err(e) = run(cli) {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> tlbsim::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(size) = &cli.tlb_size {
        config.tlb.size = config::parse_tlb_size(size)?;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> tlbsim::Result<()> {
    let config = load_config(&cli)?;
    info!("TLB size {}", config.tlb.size);

    let mut sim = Simulator::new(&config)?;
    let reader = TraceReader::open(&cli.trace)?;

    let stdout = io::stdout().lock();
    let mut sink: Box<dyn ReportSink> = if cli.json {
        Box::new(JsonReport::new(stdout))
    } else {
        Box::new(TextReport::new(stdout))
    };

    sim.run_and_report(reader, sink.as_mut())?;
    Ok(())
}
