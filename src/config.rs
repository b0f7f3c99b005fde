use clap::Parser;

/// An application to find prime numbers and factors
#[derive(Debug, Clone, Parser)]
#[command(name = "prime-finder")]
#[command(author, version, about, long_about = None)]
pub struct CliConfig {
    /// Switches on verbose mode. This will output factors and any prime numbers found
    #[arg(short, long)]
    pub verbose: bool,

    /// Tracing filter directive such as `prime_finder=debug`, takes precedence over RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}
