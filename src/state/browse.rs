#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use crate::net::types::{Partner, PartnerPage};

/// Number of partner cards requested per page.
pub const PAGE_SIZE: u32 = 12;

/// A fetch the state machine wants performed, tagged with a request id so
/// responses that resolve out of order can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchSpec {
    pub request: u64,
    pub page: u32,
    pub size: u32,
    pub has_solutions: bool,
}

/// Events driving the browse state machine.
#[derive(Clone, Debug)]
pub enum BrowseEvent {
    /// The directory page mounted; kick off the initial fetch.
    Mounted,
    /// The "has solutions" filter checkbox changed.
    FilterSet(bool),
    NextPage,
    PrevPage,
    /// A previously issued fetch finished.
    FetchResolved {
        request: u64,
        outcome: Result<PartnerPage, String>,
    },
}

/// What the directory page should render. Priority order, first match wins:
/// loading, error, empty, content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Loading,
    Error(String),
    Empty,
    Content,
}

/// Pagination, filter, and fetch-result state for the partner directory.
#[derive(Clone, Debug)]
pub struct BrowseState {
    /// Zero-based page index. After a successful fetch this holds the
    /// server-echoed page number, which is authoritative over the locally
    /// requested one.
    pub page: u32,
    /// "Only show partners with listed solutions" filter.
    pub has_solutions: bool,
    /// Partners from the most recent successful fetch. Replaced wholesale,
    /// never merged.
    pub partners: Vec<Partner>,
    /// Total page count as last reported by the server. May be stale if the
    /// data changed server-side between fetches.
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the most recently issued fetch. Resolutions carrying any other
    /// id are stale and get dropped.
    latest_request: u64,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            page: 0,
            has_solutions: false,
            partners: Vec::new(),
            total_pages: 0,
            loading: true,
            error: None,
            latest_request: 0,
        }
    }
}

impl BrowseState {
    /// Apply one event. Returns the fetch the caller must perform, if the
    /// transition requires one.
    pub fn apply(&mut self, event: BrowseEvent) -> Option<FetchSpec> {
        match event {
            BrowseEvent::Mounted => Some(self.begin_fetch()),
            BrowseEvent::FilterSet(value) => {
                if value == self.has_solutions {
                    return None;
                }
                self.has_solutions = value;
                self.page = 0;
                Some(self.begin_fetch())
            }
            BrowseEvent::NextPage => {
                if self.page + 1 >= self.total_pages {
                    return None;
                }
                self.page += 1;
                Some(self.begin_fetch())
            }
            BrowseEvent::PrevPage => {
                if self.page == 0 {
                    return None;
                }
                self.page -= 1;
                Some(self.begin_fetch())
            }
            BrowseEvent::FetchResolved { request, outcome } => {
                if request != self.latest_request {
                    return None;
                }
                self.loading = false;
                match outcome {
                    Ok(page) => {
                        self.partners = page.content;
                        self.total_pages = page.total_pages;
                        self.page = page.number;
                        self.error = None;
                    }
                    Err(message) => {
                        self.error = Some(message);
                        self.partners.clear();
                    }
                }
                None
            }
        }
    }

    /// Select the active render mode.
    pub fn render_mode(&self) -> RenderMode {
        if self.loading {
            RenderMode::Loading
        } else if let Some(message) = &self.error {
            RenderMode::Error(message.clone())
        } else if self.partners.is_empty() {
            RenderMode::Empty
        } else {
            RenderMode::Content
        }
    }

    /// Pagination controls are shown only alongside actual content and only
    /// when there is more than one page to move between.
    pub fn show_pagination(&self) -> bool {
        !self.loading && self.error.is_none() && !self.partners.is_empty() && self.total_pages > 1
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    fn begin_fetch(&mut self) -> FetchSpec {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        FetchSpec {
            request: self.latest_request,
            page: self.page,
            size: PAGE_SIZE,
            has_solutions: self.has_solutions,
        }
    }
}
