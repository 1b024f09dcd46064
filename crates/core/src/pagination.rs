//! Page requests and page envelopes for list endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Upper bound on a single page.
pub const MAX_PAGE_SIZE: i64 = 2000;

/// Zero-based page index and page size (`?page=&size=`).
///
/// An empty value (`?page=`) counts as absent.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub size: Option<i64>,
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{value}' is not a whole number"))),
    }
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Page index, clamped to `>= 0`.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    /// Page size. Non-positive values fall back to [`DEFAULT_PAGE_SIZE`].
    pub fn size(&self) -> i64 {
        match self.size {
            Some(size) if size >= 1 => size.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    /// Row offset of the first element on this page.
    pub fn offset(&self) -> i64 {
        self.page().saturating_mul(self.size())
    }
}

/// One slice of a larger result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number_of_elements: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let size = request.size();
        let number = request.page();
        let total_pages = (total_elements + size - 1) / size;

        Self {
            number_of_elements: content.len() as i64,
            empty: content.is_empty(),
            content,
            number,
            size,
            total_elements,
            total_pages,
            first: number == 0,
            last: number + 1 >= total_pages,
        }
    }
}
