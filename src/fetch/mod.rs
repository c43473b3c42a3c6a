pub mod mediawiki;

use crate::error::FetchError;
use crate::title::PageTitle;
use async_trait::async_trait;

/// One fetched page: the resolved title (redirects followed by the
/// remote service) plus its rendered markup.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub title: PageTitle,
    pub html: String,
}

/// Source of rendered article markup.
///
/// Passing `None` as the title asks the source to pick a random
/// mainspace page. `whole_page` selects the complete article; otherwise
/// only the lead section is returned.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(
        &self,
        title: Option<&PageTitle>,
        whole_page: bool,
    ) -> Result<FetchedPage, FetchError>;
}
