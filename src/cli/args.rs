use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "signer")]
#[command(about = "Compute a combined hash signature over an integer sequence")]
#[command(version)]
pub struct Cli {
    /// Input values fed to the pipeline source
    #[arg(default_values_t = [0, 1], allow_negative_numbers = true)]
    pub inputs: Vec<i64>,

    /// Number of sub-hashes derived per item in the multi-hash stage
    #[arg(short, long, default_value = "6")]
    pub fanout: usize,

    /// Maximum number of in-flight workers per stage (unbounded when omitted)
    #[arg(short = 'w', long)]
    pub max_workers: Option<usize>,

    /// Simulated cost of each primitive hash call, in milliseconds
    #[arg(short, long, default_value = "0")]
    pub latency_ms: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}
