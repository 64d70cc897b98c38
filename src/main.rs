use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use tracing_subscriber::EnvFilter;

use runtimer::config::{self, ConfigOverrides};
use runtimer::runner;
use runtimer::types::ChildOutput;

#[derive(Parser)]
#[command(
    name = "runtimer",
    version,
    about = "Time repeated invocations of an executable across input sizes"
)]
struct Cli {
    /// Config file (default: <config dir>/runtimer/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sizes to pass to the executable, comma-separated
    #[arg(short, long, value_delimiter = ',')]
    test_cases: Option<Vec<u64>>,

    /// Timed runs per test case
    #[arg(short, long)]
    repetitions: Option<usize>,

    /// Untimed runs before each test case
    #[arg(long)]
    warmup: Option<usize>,

    /// Program to benchmark; it receives the size as its only argument
    #[arg(short, long)]
    executable: Option<PathBuf>,

    /// CSV file to write (overwritten)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where the child's stdout/stderr go
    #[arg(long)]
    child_output: Option<ChildOutput>,

    /// Print a JSON run summary instead of the completion message
    #[arg(long)]
    json: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = config::resolve_config(cli.config.as_deref())?;
    let overrides = ConfigOverrides {
        test_cases: cli.test_cases,
        repetitions: cli.repetitions,
        warmup: cli.warmup,
        executable: cli.executable,
        output: cli.output,
        child_output: cli.child_output,
    };
    let config = overrides.apply(base);

    let summary = runner::run(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let output = summary.output.display().to_string();
        println!(
            "Run times have been saved to {}",
            output.if_supports_color(Stream::Stdout, |s| s.bold())
        );
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
