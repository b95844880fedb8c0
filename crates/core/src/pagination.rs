//! Cursor pagination over a forum's message log.
//!
//! These types implement Relay-style cursor pagination: a connection
//! envelope of edges plus page info. The engine presents an append-ordered
//! (oldest-first) sequence **newest-first**, while cursor values stay tied
//! to each item's stable ascending-order index. Tail appends therefore
//! never invalidate a cursor already handed to a client.
//!
//! Traversal contract: a client that feeds each page's `end_cursor` into
//! the next call's `after` walks strictly toward older items, visiting
//! every item exactly once.

use crate::error::{DomainError, DomainResult};

/// Paginated result set with edges and page info.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<T> {
    /// List of edges (node + cursor pairs), newest first.
    pub edges: Vec<Edge<T>>,
    /// Information about the current page.
    pub page_info: PageInfo,
    /// Length of the full underlying sequence, computed before windowing.
    pub total_count: i64,
}

/// A single item in a paginated result.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    /// The actual item.
    pub node: T,
    /// Ascending-order index of the item in the underlying sequence.
    pub cursor: i64,
}

/// Information about the current page in a paginated result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Whether older items exist below this page.
    pub has_next_page: bool,
    /// Whether newer items exist above this page.
    pub has_previous_page: bool,
    /// Cursor of the first edge (the newest item on the page).
    pub start_cursor: Option<i64>,
    /// Cursor of the last edge (the oldest item on the page).
    pub end_cursor: Option<i64>,
}

/// Compute a newest-first page over an ascending append-order sequence.
///
/// `first` is the maximum page size and must be positive. `after`, when
/// present, is the cursor of the last item the client consumed; the page
/// holds the `first` items strictly older than it. Without `after` the
/// page starts at the newest item.
///
/// A cursor outside `[0, len - 1]` (stale after a store reset, or
/// negative) yields an empty page rather than an error.
pub fn paginate<T: Clone>(
    items: &[T],
    first: i32,
    after: Option<i64>,
) -> DomainResult<Connection<T>> {
    if first <= 0 {
        return Err(DomainError::InvalidArgument(format!(
            "first must be a positive integer, got {first}"
        )));
    }

    let total = items.len() as i64;

    // Exclusive ascending upper bound of the window. A valid cursor
    // resumes strictly below itself; anything out of range is stale and
    // maps to the empty window at the bottom.
    let end = match after {
        None => total,
        Some(cursor) if (0..total).contains(&cursor) => cursor,
        Some(_) => 0,
    };
    let start = (end - i64::from(first)).max(0);

    let edges: Vec<Edge<T>> = items[start as usize..end as usize]
        .iter()
        .enumerate()
        .map(|(offset, node)| Edge {
            node: node.clone(),
            cursor: start + offset as i64,
        })
        .rev()
        .collect();

    let page_info = if edges.is_empty() {
        PageInfo {
            has_next_page: false,
            has_previous_page: false,
            start_cursor: None,
            end_cursor: None,
        }
    } else {
        PageInfo {
            has_next_page: start > 0,
            has_previous_page: end < total,
            start_cursor: Some(end - 1),
            end_cursor: Some(start),
        }
    };

    Ok(Connection {
        edges,
        page_info,
        total_count: total,
    })
}
