//! Relay-style cursor-based pagination types
//!
//! Implements the GraphQL Cursor Connections Specification:
//! https://relay.dev/graphql/connections.htm
//!
//! # Usage
//!
//! ```rust,ignore
//! let args = PaginationArgs { first: Some(10), after: None, .. };
//! let validated = args.validate()?;
//!
//! let (items, has_more) = Link::find_paginated(&filter, &validated, pool).await?;
//! let page_info = build_page_info(has_more, &validated, start_cursor, end_cursor);
//! ```

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use juniper::GraphQLObject;

/// Default page size when neither `first` nor `last` is given.
pub const DEFAULT_PAGE_SIZE: i32 = 25;

/// Upper bound on any requested page size.
pub const MAX_PAGE_SIZE: i32 = 100;

// ============================================================================
// Cursor
// ============================================================================

/// Opaque cursor for pagination (base64-encoded row id).
///
/// Rows are ordered by their serial primary key, so the id alone gives a
/// stable keyset position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(i32);

impl Cursor {
    pub fn new(id: i32) -> Self {
        Cursor(id)
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0.to_be_bytes())
    }

    /// Encode a raw id directly to a cursor string.
    pub fn encode_id(id: impl Into<i32>) -> String {
        Cursor::new(id.into()).encode()
    }

    pub fn decode(s: &str) -> Result<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s)
            .context("Invalid cursor: not valid base64")?;
        let raw: [u8; 4] = bytes
            .as_slice()
            .try_into()
            .context("Invalid cursor: wrong length")?;
        Ok(Cursor(i32::from_be_bytes(raw)))
    }

    pub fn into_inner(self) -> i32 {
        self.0
    }
}

// ============================================================================
// PageInfo (Relay spec)
// ============================================================================

/// Page information for cursor-based pagination.
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "Information about pagination in a connection")]
pub struct PageInfo {
    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,
    /// Cursor of the first edge in the page.
    pub start_cursor: Option<String>,
    /// Cursor of the last edge in the page.
    pub end_cursor: Option<String>,
}

impl PageInfo {
    pub fn empty() -> Self {
        PageInfo {
            has_next_page: false,
            has_previous_page: false,
            start_cursor: None,
            end_cursor: None,
        }
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// Pagination Arguments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationDirection {
    /// first/after
    Forward,
    /// last/before
    Backward,
}

/// Input arguments for cursor-based pagination.
///
/// Follows Relay spec: use either first/after (forward) or last/before (backward).
#[derive(Debug, Clone, Default)]
pub struct PaginationArgs {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
}

impl PaginationArgs {
    pub fn forward(first: i32, after: Option<String>) -> Self {
        PaginationArgs {
            first: Some(first),
            after,
            last: None,
            before: None,
        }
    }

    pub fn backward(last: i32, before: Option<String>) -> Self {
        PaginationArgs {
            first: None,
            after: None,
            last: Some(last),
            before,
        }
    }

    /// Validate pagination arguments per Relay spec.
    ///
    /// Returns validated args with defaults applied and cursor decoded.
    pub fn validate(&self) -> Result<ValidatedPaginationArgs, &'static str> {
        if (self.first.is_some() || self.after.is_some())
            && (self.last.is_some() || self.before.is_some())
        {
            return Err("Cannot use first/after with last/before");
        }

        let direction = if self.last.is_some() || self.before.is_some() {
            PaginationDirection::Backward
        } else {
            PaginationDirection::Forward
        };

        let limit = self
            .first
            .or(self.last)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let cursor_str = match direction {
            PaginationDirection::Forward => self.after.as_ref(),
            PaginationDirection::Backward => self.before.as_ref(),
        };

        let cursor = cursor_str
            .map(|c| Cursor::decode(c))
            .transpose()
            .map_err(|_| "Invalid cursor")?
            .map(Cursor::into_inner);

        Ok(ValidatedPaginationArgs {
            limit,
            cursor,
            direction,
        })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone)]
pub struct ValidatedPaginationArgs {
    /// Number of items to fetch (1-100, default 25).
    pub limit: i32,
    /// Decoded row id of the cursor, if one was given.
    pub cursor: Option<i32>,
    pub direction: PaginationDirection,
}

impl ValidatedPaginationArgs {
    /// SQL LIMIT value (limit + 1 to detect has_more).
    pub fn fetch_limit(&self) -> i64 {
        (self.limit + 1) as i64
    }

    pub fn is_forward(&self) -> bool {
        self.direction == PaginationDirection::Forward
    }

    pub fn is_backward(&self) -> bool {
        self.direction == PaginationDirection::Backward
    }
}

// ============================================================================
// Connection Builder Helpers
// ============================================================================

/// Build PageInfo from pagination results.
pub fn build_page_info(
    has_more: bool,
    args: &ValidatedPaginationArgs,
    start_cursor: Option<String>,
    end_cursor: Option<String>,
) -> PageInfo {
    match args.direction {
        PaginationDirection::Forward => PageInfo {
            has_next_page: has_more,
            has_previous_page: args.cursor.is_some(),
            start_cursor,
            end_cursor,
        },
        PaginationDirection::Backward => PageInfo {
            has_next_page: args.cursor.is_some(),
            has_previous_page: has_more,
            start_cursor,
            end_cursor,
        },
    }
}

/// Trim results to the requested limit and determine if there are more.
///
/// Queries fetch `limit + 1` rows; the extra row only signals `has_more`.
pub fn trim_results<T>(results: Vec<T>, limit: i32) -> (Vec<T>, bool) {
    let has_more = results.len() > limit as usize;
    let results = if has_more {
        results.into_iter().take(limit as usize).collect()
    } else {
        results
    };
    (results, has_more)
}
