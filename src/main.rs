mod cmd;

use clap::{ArgAction, Parser, Subcommand};
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "itamaraca")]
#[command(version)]
#[command(about = "Itamaraca PRNG sample generator", long_about = None)]
struct Cli {
    #[command(flatten)]
    params: cmd::ConfigArgs,
    #[command(flatten)]
    generate: cmd::GenerateArgs,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample sequence to a CSV file (default)
    Generate(cmd::GenerateArgs),
    /// Summary statistics and uniformity histogram, no file written
    Stats {
        #[arg(long)]
        no_histogram: bool,
    },
    /// Print the first values of the sequence
    Preview {
        #[arg(default_value_t = 5)]
        count: usize,
    },
    Version,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = cli.params;
    let generate = cli.generate;
    let result = match cli.command {
        Some(Commands::Version) => cmd::version(),
        Some(Commands::Stats { no_histogram }) => params
            .resolve()
            .and_then(|config| cmd::stats(config, !no_histogram)),
        Some(Commands::Preview { count }) => params
            .resolve()
            .and_then(|config| cmd::preview(config, count)),
        Some(Commands::Generate(args)) => params
            .resolve()
            .and_then(|config| cmd::generate(config, generate.merge(args))),
        None => params
            .resolve()
            .and_then(|config| cmd::generate(config, generate)),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
