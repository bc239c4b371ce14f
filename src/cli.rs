use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "fireflies.toml")]
    pub config: String,

    /// RNG seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Neighbor radius for a single run (overrides config; not valid with --sweep)
    #[arg(long, conflicts_with = "sweep")]
    pub radius: Option<f64>,

    /// Run the radius sweep instead of a single population
    #[arg(long, default_value_t = false)]
    pub sweep: bool,

    /// Directory for PNG output
    #[arg(long, default_value = "target/plots")]
    pub out: String,

    /// Skip writing plots
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
