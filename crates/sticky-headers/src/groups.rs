//! Which positions begin a new header group.
//!
//! A position starts a group when it is the first position in the list that
//! has a header, or when it has a header whose identifier differs from the
//! one right before it. Positions without a header never start a group, and
//! neither do positions past the end of the list.

use crate::adapter::{HeaderAdapter, HeaderId, has_header};
use crate::config::GroupLookup;

pub fn first_header_position<A: HeaderAdapter + ?Sized>(adapter: &A) -> Option<usize> {
    (0..adapter.item_count()).find(|&p| has_header(adapter.header_id(p)))
}

/// Answers by asking the adapter directly, scanning from the top for the
/// first header.
pub fn is_group_start_scan<A: HeaderAdapter + ?Sized>(adapter: &A, position: usize) -> bool {
    if position >= adapter.item_count() {
        return false;
    }
    if first_header_position(adapter) == Some(position) {
        return true;
    }
    let id = adapter.header_id(position);
    if !has_header(id) {
        return false;
    }
    position > 0 && id != adapter.header_id(position - 1)
}

/// Every group start, in ascending order, from one pass over the adapter.
pub fn group_starts<A: HeaderAdapter + ?Sized>(adapter: &A) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut prev: Option<HeaderId> = None;
    for position in 0..adapter.item_count() {
        let id = adapter.header_id(position);
        if has_header(id) && (starts.is_empty() || prev != Some(id)) {
            starts.push(position);
        }
        prev = Some(id);
    }
    starts
}

#[derive(Debug)]
struct GroupTable {
    item_count: usize,
    starts: Vec<usize>,
}

#[derive(Debug)]
pub struct GroupResolver {
    lookup: GroupLookup,
    table: Option<GroupTable>,
}

impl GroupResolver {
    pub fn new(lookup: GroupLookup) -> Self {
        Self {
            lookup,
            table: None,
        }
    }

    /// Drops the start table; the next indexed query rebuilds it.
    pub fn invalidate(&mut self) {
        self.table = None;
    }

    pub fn is_group_start<A: HeaderAdapter + ?Sized>(&mut self, adapter: &A, position: usize) -> bool {
        match self.lookup {
            GroupLookup::Scan => is_group_start_scan(adapter, position),
            GroupLookup::Indexed => {
                self.refresh(adapter);
                self.table
                    .as_ref()
                    .is_some_and(|t| t.starts.binary_search(&position).is_ok())
            }
        }
    }

    fn refresh<A: HeaderAdapter + ?Sized>(&mut self, adapter: &A) {
        let item_count = adapter.item_count();
        if self
            .table
            .as_ref()
            .is_none_or(|t| t.item_count != item_count)
        {
            let starts = group_starts(adapter);
            log::trace!("group table rebuilt: {} groups over {item_count} items", starts.len());
            self.table = Some(GroupTable { item_count, starts });
        }
    }
}
