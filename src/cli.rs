use clap::Parser;

/// A one-shot interactive integer calculator.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Print debug information.
    #[clap(long, short)]
    pub verbose: bool,
}
