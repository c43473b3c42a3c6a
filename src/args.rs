use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wikitrace")]
#[command(about = "Follows the first in-body link of Wikipedia articles until a target is reached")]
#[command(version)]
pub struct Args {
    /// Wikipedia page to start from (a random mainspace page when omitted)
    pub page: Option<String>,

    /// Page name to stop at
    #[arg(short, long)]
    pub end: Option<String>,

    /// Keep going past the end page; stop only on a loop or a dead end
    #[arg(short, long)]
    pub infinite: bool,

    /// Number of independent traversals to run
    #[arg(short, long, default_value_t = 1)]
    pub times: usize,

    /// MediaWiki API endpoint to query
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Load configuration from a JSON file (flags override its values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
