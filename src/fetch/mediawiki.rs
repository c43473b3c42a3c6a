use super::{FetchedPage, PageSource};
use crate::error::FetchError;
use crate::title::PageTitle;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// The English Wikipedia action API.
pub const DEFAULT_API_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

const USER_AGENT: &str = concat!("wikitrace/", env!("CARGO_PKG_VERSION"));

/// MediaWiki action API client.
///
/// Speaks just enough of the API for traversal: `action=parse` for a
/// page's rendered markup (lead section or whole page, redirects
/// resolved) and `action=query&list=random` for picking a random
/// mainspace start page.
#[derive(Debug, Clone)]
pub struct MediaWikiClient {
    endpoint: Url,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    error: Option<ApiError>,
    parse: Option<ParsePayload>,
    query: Option<QueryPayload>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

#[derive(Debug, Deserialize)]
struct ParsePayload {
    title: String,
    text: ParseText,
}

#[derive(Debug, Deserialize)]
struct ParseText {
    #[serde(rename = "*")]
    content: String,
}

#[derive(Debug, Deserialize)]
struct QueryPayload {
    random: Vec<RandomPage>,
}

#[derive(Debug, Deserialize)]
struct RandomPage {
    title: String,
}

impl MediaWikiClient {
    /// Create a client for the given API endpoint.
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| FetchError::Malformed(format!("invalid API endpoint: {}", e)))?;
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { endpoint, client })
    }

    async fn call(&self, params: &[(&str, &str)]) -> Result<ApiResponse, FetchError> {
        let response: ApiResponse = self
            .client
            .get(self.endpoint.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(FetchError::Remote {
                code: error.code,
                info: error.info,
            });
        }

        Ok(response)
    }

    async fn random_title(&self) -> Result<PageTitle, FetchError> {
        ::log::debug!("Requesting a random mainspace page");

        let response = self
            .call(&[
                ("action", "query"),
                ("list", "random"),
                ("rnnamespace", "0"),
                ("rnlimit", "1"),
                ("format", "json"),
            ])
            .await?;

        let title = response
            .query
            .and_then(|q| q.random.into_iter().next())
            .map(|page| PageTitle::new(page.title))
            .ok_or_else(|| FetchError::Malformed("random query returned no page".to_string()))?;

        ::log::info!("Random start page: {}", title);
        Ok(title)
    }
}

#[async_trait]
impl PageSource for MediaWikiClient {
    async fn fetch(
        &self,
        title: Option<&PageTitle>,
        whole_page: bool,
    ) -> Result<FetchedPage, FetchError> {
        let title = match title {
            Some(title) => title.clone(),
            None => self.random_title().await?,
        };

        ::log::debug!("Fetching '{}' (whole_page: {})", title, whole_page);

        let mut params = vec![
            ("action", "parse"),
            ("page", title.as_str()),
            ("prop", "text"),
            ("redirects", "1"),
            ("format", "json"),
        ];
        if !whole_page {
            params.push(("section", "0"));
        }

        let response = self.call(&params).await?;
        let payload = response
            .parse
            .ok_or_else(|| FetchError::Malformed("parse response missing payload".to_string()))?;

        Ok(FetchedPage {
            title: PageTitle::new(payload.title),
            html: payload.text.content,
        })
    }
}
