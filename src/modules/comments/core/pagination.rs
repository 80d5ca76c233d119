// Page arithmetic for listing comments.
//
// Pages are 1-based. Anything that is absent, unparsable or not strictly
// positive falls back to the defaults instead of being rejected.

use std::ops::Range;

use serde::Serialize;

use crate::modules::comments::core::comment::Comment;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            size: positive_or(size, DEFAULT_PAGE_SIZE),
        }
    }

    /// Builds a request from raw query string values.
    pub fn from_raw(page: Option<&str>, size: Option<&str>) -> Self {
        let page = parse_or(page, DEFAULT_PAGE);
        let size = parse_or(size, DEFAULT_PAGE_SIZE);
        Self { page, size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Index range of this page within a sequence of `total` items.
    /// Both ends are clamped to `total`, so pages past the end are empty.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.size).min(total);
        let end = start.saturating_add(self.size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.bounds(items.len());
        if start > end {
            return &[];
        }
        &items[start..end]
    }
}

fn positive_or(value: i64, default: usize) -> usize {
    if value > 0 {
        usize::try_from(value).unwrap_or(default)
    } else {
        default
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.parse::<i64>().ok())
        .map(|v| positive_or(v, default))
        .unwrap_or(default)
}

/// One page of comments together with the unfiltered total.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommentPage {
    pub total: usize,
    pub comments: Vec<Comment>,
}
