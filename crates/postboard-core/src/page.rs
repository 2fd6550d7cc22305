//! Page state and slicing for the post list.
//!
//! The view owns one `PageState`; navigation only re-slices data the
//! caller already holds, it never triggers a fetch. The state is
//! deliberately not reset when the underlying list changes, matching
//! the observed UI behavior; callers that want the page clamped after
//! a shrink opt in through [`PageState::clamp`].

use crate::constant::POSTS_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        PageState {
            current_page: 1,
            page_size: POSTS_PER_PAGE,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page state with a non-default page size. Sizes below 1 are
    /// bumped to 1 so slicing stays well-defined.
    pub fn with_page_size(page_size: usize) -> Self {
        PageState {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for a list of `len` items.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// The contiguous slice of `items` visible on the current page.
    /// A page past the end of the list yields an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = usize::min(start + self.page_size, items.len());
        &items[start..end]
    }

    /// Jump directly to `page`. Out-of-range requests are ignored.
    pub fn set_page(&mut self, page: usize, len: usize) {
        if page >= 1 && page <= self.total_pages(len) {
            self.current_page = page;
        }
    }

    /// Step back one page; a no-op on the first page.
    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Step forward one page; a no-op on the last page.
    pub fn next(&mut self, len: usize) {
        if self.current_page < self.total_pages(len) {
            self.current_page += 1;
        }
    }

    /// Pull the current page back into range after the list shrank,
    /// e.g. when a search query filtered most of it away.
    pub fn clamp(&mut self, len: usize) {
        let total = self.total_pages(len).max(1);
        if self.current_page > total {
            self.current_page = total;
        }
    }

    /// Page-navigation controls for a list of `len` items, or `None`
    /// when everything fits on a single page.
    pub fn controls(&self, len: usize) -> Option<PageControls> {
        let total = self.total_pages(len);
        if total <= 1 {
            return None;
        }
        Some(PageControls {
            show_prev: self.current_page > 1,
            show_next: self.current_page < total,
            links: (1..=total)
                .map(|number| PageLink {
                    number,
                    active: number == self.current_page,
                })
                .collect(),
        })
    }
}

/// What the pagination bar should show: previous/next affordances and
/// one numbered link per page, with the current page marked active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageControls {
    pub show_prev: bool,
    pub show_next: bool,
    pub links: Vec<PageLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

impl Display for PageControls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.show_prev {
            write!(f, "< prev  ")?;
        }
        for link in self.links.iter() {
            if link.active {
                write!(f, "[{}] ", link.number)?;
            } else {
                write!(f, "{} ", link.number)?;
            }
        }
        if self.show_next {
            write!(f, " next >")?;
        }
        Ok(())
    }
}
