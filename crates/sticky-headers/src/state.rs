use std::collections::HashMap;

use crate::adapter::{HeaderAdapter, HeaderId, has_header};

/// How a pinned header currently relates to the content around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HeaderState {
    /// Drawn on top of items that have scrolled under it.
    Stacked,
    /// Drawn flush before its items, nothing underneath.
    Inline,
}

#[derive(Debug, Default)]
pub struct HeaderStates {
    states: HashMap<HeaderId, HeaderState>,
}

impl HeaderStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: HeaderId) -> Option<HeaderState> {
        self.states.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// A freshly realized header starts inline; nobody is told.
    pub fn reset(&mut self, id: HeaderId) {
        if has_header(id) {
            self.states.insert(id, HeaderState::Inline);
        }
    }

    /// Records `state` and notifies the adapter if it differs from the
    /// current one. Returns whether a notification went out.
    pub fn set_and_notify<A: HeaderAdapter + ?Sized>(
        &mut self,
        adapter: &A,
        holder: Option<&A::Holder>,
        id: HeaderId,
        position: usize,
        state: HeaderState,
    ) -> bool {
        if !has_header(id) || self.get(id) == Some(state) {
            return false;
        }
        self.states.insert(id, state);
        log::trace!("header {id} at {position} -> {state:?}");
        match holder {
            Some(holder) => {
                adapter.on_header_state_change(holder, state, position);
                true
            }
            None => {
                log::warn!("header {id} changed state without a realized holder");
                false
            }
        }
    }
}
