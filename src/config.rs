use crate::fetch::mediawiki::DEFAULT_API_ENDPOINT;
use crate::title::PageTitle;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for one traversal session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Page to start from; a random mainspace page is picked when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<PageTitle>,

    /// Page to stop at
    #[serde(default = "default_end")]
    pub end: PageTitle,

    /// Disregard the end page; stop only on a loop or a dead end
    #[serde(default)]
    pub infinite: bool,

    /// MediaWiki API endpoint to query
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            start: None,
            end: default_end(),
            infinite: false,
            api_endpoint: default_api_endpoint(),
        }
    }
}

impl TraceConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default end page for the traversal
fn default_end() -> PageTitle {
    PageTitle::new("Philosophy")
}

/// Default value for api_endpoint
fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}
