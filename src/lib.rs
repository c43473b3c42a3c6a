// Re-export modules
pub mod config;
pub mod error;
pub mod fetch;
pub mod mask;
pub mod parsers;
pub mod title;
pub mod trace;

// Re-export commonly used types for convenience
pub use config::TraceConfig;
pub use error::{FetchError, TraceError};
pub use fetch::{FetchedPage, PageSource, mediawiki::MediaWikiClient};
pub use title::PageTitle;
pub use trace::{Trace, TraceSummary};

use std::path::Path;

/// Builder for traversal sessions.
///
/// Basic usage:
///
/// ```no_run
/// use wikitrace::{MediaWikiClient, TraceBuilder};
/// use wikitrace::fetch::mediawiki::DEFAULT_API_ENDPOINT;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MediaWikiClient::new(DEFAULT_API_ENDPOINT)?;
/// let mut trace = TraceBuilder::new().start("Sandwich").build(client);
/// while let Some(page) = trace.next_page().await {
///     println!("{}", page?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceBuilder {
    config: TraceConfig,
}

impl TraceBuilder {
    /// Create a builder with the default configuration (random start
    /// page, "Philosophy" as the end page)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page to start from
    pub fn start(mut self, page: impl Into<String>) -> Self {
        self.config.start = Some(PageTitle::new(page));
        self
    }

    /// Set the page to stop at
    pub fn end(mut self, page: impl Into<String>) -> Self {
        self.config.end = PageTitle::new(page);
        self
    }

    /// Keep traversing past the end page; only a loop or a dead end
    /// stops the session
    pub fn infinite(mut self, value: bool) -> Self {
        self.config.infinite = value;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: TraceConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = TraceConfig::from_file(path)?;
        Ok(self)
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Build a session over the given page source
    pub fn build<S: PageSource>(self, source: S) -> Trace<S> {
        Trace::new(self.config, source)
    }
}
