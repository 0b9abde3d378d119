use anyhow::Result;
use clap::Parser;

use connect_m::simulation::*;

/// Pit two alpha-beta agents against each other across board sizes and depths
#[derive(Parser)]
#[command(name = "sweep", about = "Run an engine-vs-engine depth sweep")]
struct Cli {
    /// Board sizes to play on
    #[arg(long, value_delimiter = ',', default_values_t = vec![3, 4, 5, 6])]
    sizes: Vec<usize>,

    /// Search depths given to each agent
    #[arg(long, value_delimiter = ',', default_values_t = vec![1, 2, 3, 4])]
    depths: Vec<usize>,

    /// Games played for every pairing of depths
    #[arg(long, default_value_t = 3)]
    games: usize,

    /// Tokens in a line needed to win, defaults to the board size
    #[arg(long)]
    connect: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SweepConfig {
        sizes: cli.sizes,
        depths: cli.depths,
        games: cli.games,
        connect: cli.connect,
        progress: !cli.quiet,
    };

    let report = run_sweep(&config)?;
    println!("{}", report);
    Ok(())
}
