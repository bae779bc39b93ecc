use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "manifold",
    about = "Manifold: run intents through the manifestation pipeline and certificate ledger",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one intent through a fresh engine and print the resulting state
    Manifest {
        /// The intent text
        intent: String,

        /// Observer id supplied by the identity provider
        #[arg(long, default_value = "anonymous")]
        observer: String,

        /// Intent pressure in [0,1]; defaults to the configured pressure
        #[arg(long)]
        pressure: Option<f64>,

        /// Path to an engine config TOML
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a file of intents (one per line) through a single engine
    Batch {
        /// Path to the intent file; blank lines and '#' comments are skipped
        file: String,

        /// Observer id for every intent in the file
        #[arg(long, default_value = "anonymous")]
        observer: String,

        /// Intent pressure in [0,1]; defaults to the configured pressure
        #[arg(long)]
        pressure: Option<f64>,

        /// Path to an engine config TOML
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print analyzer metrics and the gate verdict for an intent, without
    /// mutating anything
    Probe {
        /// The intent text
        intent: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drive a certificate through its lifecycle in-process
    Certify {
        /// The certified intent text
        intent: String,

        /// Creator id
        #[arg(long, default_value = "anonymous")]
        creator: String,

        /// Stake amount
        #[arg(long, default_value_t = 80.0)]
        stake: f64,

        /// Funding goal
        #[arg(long, default_value_t = 400.0)]
        goal: f64,

        /// Number of simulated backers
        #[arg(long, default_value_t = 0)]
        backers: usize,

        /// Flat backing amount per backer
        #[arg(long, default_value_t = 100.0)]
        amount: f64,

        /// Settle the certificate as completed
        #[arg(long, conflicts_with = "fail")]
        complete: bool,

        /// Settle the certificate as failed
        #[arg(long)]
        fail: bool,

        /// Yield distributed on completion
        #[arg(long = "yield", default_value_t = 0.0)]
        yield_amount: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
