use sticky_core::View;

use crate::list::ListViewport;
use crate::state::HeaderState;

/// Groups contiguous items under one header. Negative means "no header".
pub type HeaderId = i64;

pub fn has_header(id: HeaderId) -> bool {
    id >= 0
}

/// Whatever the adapter hands back from [`HeaderAdapter::create_header`].
pub trait HeaderHolder {
    fn view(&self) -> &View;
}

impl HeaderHolder for View {
    fn view(&self) -> &View {
        self
    }
}

/// The section data behind a list, as far as headers are concerned.
///
/// The decoration never reads item data; it only asks which header each
/// position belongs to and how to build that header. Methods take `&self` so
/// the adapter can be shared with the list that owns it; use interior
/// mutability to record anything.
pub trait HeaderAdapter {
    type Holder: HeaderHolder;

    fn item_count(&self) -> usize;

    fn header_id(&self, position: usize) -> HeaderId;

    fn create_header(&self, list: &ListViewport, position: usize) -> Self::Holder;

    fn bind_header(&self, holder: &mut Self::Holder, position: usize);

    /// Sticky decorations call this once per visual state transition.
    fn on_header_state_change(&self, holder: &Self::Holder, state: HeaderState, position: usize) {
        let _ = (holder, state, position);
    }
}
