//! Recording adapter and list builders shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use sticky_core::{Color, Modifier, Rect, Size, Surface, View};

use crate::adapter::{HeaderAdapter, HeaderHolder, HeaderId};
use crate::list::{ListViewport, Orientation, VisibleChild};
use crate::state::HeaderState;

pub const HEADER_COLOR: &str = "#202020";
pub const DEFAULT_EXTENT: f32 = 100.0;

#[derive(Debug)]
pub struct TestHolder {
    pub id: HeaderId,
    pub bound: Option<usize>,
    view: View,
}

impl HeaderHolder for TestHolder {
    fn view(&self) -> &View {
        &self.view
    }
}

type ViewFactory = Box<dyn Fn(HeaderId) -> View>;

pub struct SectionAdapter {
    ids: RefCell<Vec<HeaderId>>,
    extents: HashMap<HeaderId, f32>,
    orientation: Orientation,
    view_factory: Option<ViewFactory>,
    created: RefCell<Vec<usize>>,
    notifications: RefCell<Vec<(HeaderId, HeaderState, usize)>>,
}

impl SectionAdapter {
    pub fn new(orientation: Orientation, ids: &[HeaderId]) -> Self {
        Self {
            ids: RefCell::new(ids.to_vec()),
            extents: HashMap::new(),
            orientation,
            view_factory: None,
            created: RefCell::new(Vec::new()),
            notifications: RefCell::new(Vec::new()),
        }
    }

    pub fn vertical(ids: &[HeaderId]) -> Self {
        Self::new(Orientation::Vertical, ids)
    }

    pub fn horizontal(ids: &[HeaderId]) -> Self {
        Self::new(Orientation::Horizontal, ids)
    }

    /// Main-axis extent of the header for `id`; others use [`DEFAULT_EXTENT`].
    pub fn with_extent(mut self, id: HeaderId, extent: f32) -> Self {
        self.extents.insert(id, extent);
        self
    }

    pub fn with_view(mut self, f: impl Fn(HeaderId) -> View + 'static) -> Self {
        self.view_factory = Some(Box::new(f));
        self
    }

    pub fn set_ids(&self, ids: &[HeaderId]) {
        *self.ids.borrow_mut() = ids.to_vec();
    }

    pub fn created(&self) -> Vec<usize> {
        self.created.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<(HeaderId, HeaderState, usize)> {
        self.notifications.borrow().clone()
    }

    fn header_view(&self, id: HeaderId) -> View {
        if let Some(f) = &self.view_factory {
            return f(id);
        }
        let extent = self.extents.get(&id).copied().unwrap_or(DEFAULT_EXTENT);
        let m = Modifier::new().background(Color::from_hex(HEADER_COLOR));
        match self.orientation {
            Orientation::Vertical => Surface(m.height(extent)),
            Orientation::Horizontal => Surface(m.width(extent)),
        }
    }
}

impl HeaderAdapter for SectionAdapter {
    type Holder = TestHolder;

    fn item_count(&self) -> usize {
        self.ids.borrow().len()
    }

    fn header_id(&self, position: usize) -> HeaderId {
        self.ids.borrow()[position]
    }

    fn create_header(&self, _list: &ListViewport, position: usize) -> TestHolder {
        self.created.borrow_mut().push(position);
        let id = self.header_id(position);
        TestHolder {
            id,
            bound: None,
            view: self.header_view(id),
        }
    }

    fn bind_header(&self, holder: &mut TestHolder, position: usize) {
        holder.bound = Some(position);
    }

    fn on_header_state_change(&self, holder: &TestHolder, state: HeaderState, position: usize) {
        self.notifications
            .borrow_mut()
            .push((holder.id, state, position));
    }
}

/// Vertical list whose children are `(position, top, height)` rows spanning
/// the full width.
pub fn vertical_list(width: f32, height: f32, rows: &[(usize, f32, f32)]) -> ListViewport {
    ListViewport::linear(Orientation::Vertical, Size::new(width, height)).with_children(
        rows.iter()
            .map(|&(position, top, h)| VisibleChild::new(position, Rect::new(0.0, top, width, h)))
            .collect(),
    )
}

/// Horizontal list whose children are `(position, left, width)` columns.
pub fn horizontal_list(width: f32, height: f32, cols: &[(usize, f32, f32)]) -> ListViewport {
    ListViewport::linear(Orientation::Horizontal, Size::new(width, height)).with_children(
        cols.iter()
            .map(|&(position, left, w)| VisibleChild::new(position, Rect::new(left, 0.0, w, height)))
            .collect(),
    )
}
