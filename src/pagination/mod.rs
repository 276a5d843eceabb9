//! Page arithmetic and the page navigator.
//!
//! Pages are identified by 1-based ids. A list of `total` records split into
//! pages of `PageSize` has `ceil(total / size)` pages, and zero pages when the
//! list is empty. The navigator still reports page 1 in that case so the
//! listing always has a current page to show (an empty one).

use crate::catalog::{GameRecord, RecommendationList};
use std::num::NonZeroUsize;
use std::ops::{Range, RangeInclusive};
use thiserror::Error;

pub const DEFAULT_POSTS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("invalid configuration: posts per page must be positive, got {per_page}")]
    InvalidConfiguration { per_page: i64 },

    #[error("page {requested} is out of range (1..={page_count})")]
    OutOfRangePage { requested: usize, page_count: usize },
}

/// Number of records per page, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(per_page: usize) -> Result<Self, PaginationError> {
        NonZeroUsize::new(per_page)
            .map(Self)
            .ok_or(PaginationError::InvalidConfiguration { per_page: 0 })
    }

    /// Same check for a size read from a settings file, where it may be negative
    pub fn from_signed(per_page: i64) -> Result<Self, PaginationError> {
        usize::try_from(per_page)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(PaginationError::InvalidConfiguration { per_page })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// `ceil(total_posts / per_page)`
pub fn page_count(total_posts: usize, per_page: PageSize) -> usize {
    total_posts.div_ceil(per_page.get())
}

/// Page ids `1..=page_count`, empty when there are no posts
pub fn page_numbers(total_posts: usize, per_page: PageSize) -> RangeInclusive<usize> {
    1..=page_count(total_posts, per_page)
}

/// Owns the current page over a recommendation list
#[derive(Debug, Clone)]
pub struct PageNavigator {
    list: RecommendationList,
    page_size: PageSize,
    current_page: usize,
}

impl PageNavigator {
    pub fn new(list: RecommendationList, page_size: PageSize) -> Self {
        Self {
            list,
            page_size,
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_posts(&self) -> usize {
        self.list.len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.list.len(), self.page_size)
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        page_numbers(self.list.len(), self.page_size)
    }

    pub fn list(&self) -> &RecommendationList {
        &self.list
    }

    /// Jump straight to page `page`.
    ///
    /// Pages outside `1..=max(page_count, 1)` are rejected and the current
    /// page is left as it was.
    pub fn go_to_page(&mut self, page: usize) -> Result<(), PaginationError> {
        let last = self.page_count().max(1);
        if page == 0 || page > last {
            log::warn!("rejected jump to page {} ({} pages)", page, self.page_count());
            return Err(PaginationError::OutOfRangePage {
                requested: page,
                page_count: self.page_count(),
            });
        }

        if page != self.current_page {
            log::debug!("page {} -> {}", self.current_page, page);
        }
        self.current_page = page;
        Ok(())
    }

    /// Index range of the current page, clipped to the list
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.list.len();
        let start = ((self.current_page - 1) * self.page_size.get()).min(len);
        let end = (start + self.page_size.get()).min(len);
        start..end
    }

    pub fn visible_slice(&self) -> &[GameRecord] {
        &self.list.as_slice()[self.visible_range()]
    }

    /// Swap in a freshly delivered list, keeping the current page when it still exists
    pub fn replace_list(&mut self, list: RecommendationList) {
        self.list = list;
        let last = self.page_count().max(1);
        if self.current_page > last {
            log::debug!("page {} no longer exists, clamped to {}", self.current_page, last);
            self.current_page = last;
        }
    }
}
