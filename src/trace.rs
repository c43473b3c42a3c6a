use crate::config::TraceConfig;
use crate::error::TraceError;
use crate::fetch::{FetchedPage, PageSource};
use crate::parsers;
use crate::title::PageTitle;
use std::mem;
use std::time::{Duration, Instant};

/// Where the session stands between pulls.
enum State {
    /// Nothing resolved yet; the start page may still need picking
    Start,
    /// The next resolution step targets `page`
    Resolve { page: PageTitle, whole_page: bool },
    /// A failure that must surface on the next pull (the page that
    /// triggered it has already been emitted)
    Fail(TraceError),
    /// Terminal; every subsequent pull returns `None`
    Finished,
}

/// Hop count and wall time for one session, available at any point so
/// an interrupted run can still report partial progress.
#[derive(Debug, Clone, Copy)]
pub struct TraceSummary {
    /// Number of links successfully followed
    pub hops: usize,
    /// Wall time since the session was created
    pub elapsed: Duration,
}

/// One traversal session: repeatedly resolves the first qualifying link
/// of the current page until the end page is reached, a loop is
/// detected, or a fully escalated page yields no link.
///
/// The session is pull-based. Each call to [`Trace::next_page`]
/// performs at most one resolution step (one fetch, or two when the
/// lead section forces whole-page escalation) and nothing is fetched
/// ahead of consumption. A finished session only ever returns `None`;
/// resuming requires a fresh `Trace` with its own visited set.
pub struct Trace<S> {
    config: TraceConfig,
    source: S,
    state: State,
    // Pages that have yielded a next hop, in traversal order. Owned by
    // this session alone; cleared on every terminal transition.
    visited: Vec<PageTitle>,
    hops: usize,
    started: Instant,
}

impl<S: PageSource> Trace<S> {
    pub fn new(config: TraceConfig, source: S) -> Self {
        Self {
            config,
            source,
            state: State::Start,
            visited: Vec::new(),
            hops: 0,
            started: Instant::now(),
        }
    }

    /// Advance the traversal by one page.
    ///
    /// Returns the next page title in the path, an error that ended the
    /// session, or `None` once the session is over. Errors are yielded
    /// exactly once.
    pub async fn next_page(&mut self) -> Option<Result<PageTitle, TraceError>> {
        loop {
            match mem::replace(&mut self.state, State::Finished) {
                State::Finished => return None,
                // Visited set was already cleared when the failure was recorded
                State::Fail(err) => return Some(Err(err)),
                State::Start => {
                    if let Some(title) = &self.config.start {
                        if !title.is_mainspace() {
                            let name = title.to_string();
                            return self.fail(TraceError::InvalidPageName(name));
                        }
                    }
                    let result = self.source.fetch(self.config.start.as_ref(), false).await;
                    let fetched = match result {
                        Ok(fetched) => fetched,
                        Err(e) => return self.fail(e.into()),
                    };
                    // Covers both a random pick and a redirect of the
                    // explicit start page
                    if !fetched.title.is_mainspace() {
                        return self
                            .fail(TraceError::InvalidPageName(fetched.title.to_string()));
                    }
                    match self.resolve(fetched, false) {
                        Ok(Some(page)) => return Some(Ok(page)),
                        Ok(None) => continue,
                        Err(e) => return self.fail(e),
                    }
                }
                State::Resolve { page, whole_page } => {
                    let result = self.source.fetch(Some(&page), whole_page).await;
                    let fetched = match result {
                        Ok(fetched) => fetched,
                        Err(e) => return self.fail(e.into()),
                    };
                    match self.resolve(fetched, whole_page) {
                        Ok(Some(page)) => return Some(Ok(page)),
                        Ok(None) => continue,
                        Err(e) => return self.fail(e),
                    }
                }
            }
        }
    }

    /// Process one fetched page. `Ok(Some(_))` emits that title,
    /// `Ok(None)` means escalation was scheduled and the caller should
    /// take another turn of its loop, `Err` ends the session.
    fn resolve(
        &mut self,
        fetched: FetchedPage,
        whole_page: bool,
    ) -> Result<Option<PageTitle>, TraceError> {
        let page = fetched.title;

        if !whole_page {
            // A redirect can land on a page that already served as a
            // link source
            if self.visited.contains(&page) {
                return Err(TraceError::LoopDetected);
            }

            if !self.config.infinite && page == self.config.end {
                ::log::info!("Reached end page '{}' after {} hop(s)", page, self.hops);
                self.visited.clear();
                self.state = State::Finished;
                return Ok(Some(page));
            }
        }

        match parsers::first_link(&fetched.html) {
            Some(next) => {
                ::log::debug!("First link of '{}': '{}'", page, next);
                self.visited.push(page.clone());
                if self.visited.contains(&next) {
                    // The current page still gets emitted; the failure
                    // surfaces on the next pull, before any further fetch
                    self.visited.clear();
                    self.state = State::Fail(TraceError::LoopDetected);
                    return Ok(Some(page));
                }
                self.hops += 1;
                self.state = State::Resolve {
                    page: next,
                    whole_page: false,
                };
                Ok(Some(page))
            }
            None if !whole_page => {
                ::log::debug!(
                    "No qualifying link in the lead section of '{}', re-parsing the whole page",
                    page
                );
                self.state = State::Resolve {
                    page,
                    whole_page: true,
                };
                Ok(None)
            }
            // A fully escalated page with no link is immediately
            // terminal; there is no retry
            None => Err(TraceError::LinkNotFound(page.to_string())),
        }
    }

    fn fail(&mut self, err: TraceError) -> Option<Result<PageTitle, TraceError>> {
        self.visited.clear();
        self.state = State::Finished;
        Some(Err(err))
    }

    /// Progress so far; valid on a live, finished or failed session.
    pub fn summary(&self) -> TraceSummary {
        TraceSummary {
            hops: self.hops,
            elapsed: self.started.elapsed(),
        }
    }
}
