//! Page-by-page loading of the users list.
//!
//! [`UserListLoader`] is the state a users screen owns for its lifetime: the
//! page cursor, the users accumulated so far, and the in-flight guard that
//! keeps at most one page request outstanding.

use crate::classifier::abortable;
use crate::models::User;
use crate::outcome::{ApiFailure, Outcome};
use crate::traits::UsersApi;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const LOG_LABEL: &str = "getUsers";

/// Page number, total pages and the "has more" flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Next page to request, starting at 1
    pub current_page: u32,
    /// Known after the first successful page
    pub total_pages: Option<u32>,
    pub has_more: bool,
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: None,
            has_more: true,
        }
    }

    /// Record a successfully applied page
    fn advance(&mut self, total_pages: u32) {
        self.total_pages = Some(total_pages);
        if self.current_page < total_pages {
            self.current_page += 1;
        } else {
            self.has_more = false;
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// What a load request ended with
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad {
    /// A page was appended
    Loaded {
        page: u32,
        appended: usize,
        has_more: bool,
    },
    /// Another page request is still in flight
    Busy,
    /// The last page was already fetched
    Exhausted,
    /// The trigger did not ask for a page
    Skipped,
    /// The loader was torn down; nothing was applied
    Aborted,
    /// The request failed; the same page will be requested next time
    Failed(ApiFailure),
}

#[derive(Debug, Default)]
struct ListState {
    cursor: PageCursor,
    users: Vec<User>,
    activated: bool,
}

/// Resets the in-flight flag however the load ends, including when the
/// future is dropped mid-request.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Cursor-driven loader for the users listing
pub struct UserListLoader<A> {
    api: A,
    page_size: u32,
    state: Mutex<ListState>,
    loading: AtomicBool,
    cancel: CancellationToken,
}

impl<A: UsersApi> UserListLoader<A> {
    pub fn new(api: A, page_size: u32) -> Self {
        Self {
            api,
            page_size,
            state: Mutex::new(ListState::default()),
            loading: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    /// Share a cancellation token with the owner (e.g. a parent screen)
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// First activation of the listing: loads the current page regardless
    /// of `has_more`. Later activations do nothing.
    pub async fn activate(&self) -> PageLoad {
        {
            let mut state = self.state.lock();
            if state.activated {
                return PageLoad::Skipped;
            }
            state.activated = true;
        }
        self.fetch_page(true).await
    }

    /// Scroll trigger: loads only when the end of the list is near and more
    /// pages exist.
    pub async fn on_scroll(&self, near_end: bool) -> PageLoad {
        if !near_end {
            return PageLoad::Skipped;
        }
        self.load_next_page().await
    }

    /// Request the page under the cursor
    pub async fn load_next_page(&self) -> PageLoad {
        self.fetch_page(false).await
    }

    async fn fetch_page(&self, ignore_exhausted: bool) -> PageLoad {
        if self.cancel.is_cancelled() {
            return PageLoad::Aborted;
        }

        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Page request already in flight");
            return PageLoad::Busy;
        }
        let _guard = LoadingGuard(&self.loading);

        let page = {
            let state = self.state.lock();
            if !state.cursor.has_more && !ignore_exhausted {
                return PageLoad::Exhausted;
            }
            state.cursor.current_page
        };

        debug!(page, page_size = self.page_size, "Loading users page");
        let outcome = abortable(
            LOG_LABEL,
            &self.cancel,
            self.api.get_users(page, self.page_size),
        )
        .await;

        match outcome {
            Outcome::Success(data) if data.success => {
                let mut state = self.state.lock();
                let appended = data.users.len();
                state.users.extend(data.users);
                state.cursor.advance(data.total_pages);
                PageLoad::Loaded {
                    page,
                    appended,
                    has_more: state.cursor.has_more,
                }
            }
            Outcome::Success(_) => {
                warn!(page, "Users page reported success=false");
                PageLoad::Failed(ApiFailure::unknown().with_detail("success=false"))
            }
            Outcome::Aborted => PageLoad::Aborted,
            Outcome::Error(failure) => PageLoad::Failed(failure),
            Outcome::SuccessEmpty | Outcome::Loading => {
                PageLoad::Failed(ApiFailure::unknown().with_detail("empty users page"))
            }
        }
    }

    /// Tear down: any in-flight request resolves as aborted and later
    /// triggers do nothing.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cursor(&self) -> PageCursor {
        self.state.lock().cursor
    }

    pub fn has_more(&self) -> bool {
        self.state.lock().cursor.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Snapshot of the users loaded so far, in arrival order
    pub fn users(&self) -> Vec<User> {
        self.state.lock().users.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
