//! Paginated list envelope
//!
//! List endpoints answer either with a bare JSON array or with a
//! `{count, next, previous, results}` envelope depending on whether the
//! server-side view paginates. [`ListPayload`] accepts both and
//! [`ListPayload::into_paginated`] folds them into one shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wrap a complete, unpaginated list.
    pub fn from_items(results: Vec<T>) -> Self {
        Self { count: results.len() as u64, next: None, previous: None, results }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

/// Either shape a list endpoint may return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Page(Paginated<T>),
}

impl<T> ListPayload<T> {
    /// Envelopes pass through untouched; bare arrays get `count = len`.
    pub fn into_paginated(self) -> Paginated<T> {
        match self {
            Self::Bare(items) => Paginated::from_items(items),
            Self::Page(page) => page,
        }
    }
}

impl<T> From<ListPayload<T>> for Paginated<T> {
    fn from(payload: ListPayload<T>) -> Self {
        payload.into_paginated()
    }
}
