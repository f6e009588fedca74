use std::rc::Rc;

use sticky_core::{Canvas, EdgeInsets};

use crate::adapter::{HeaderAdapter, HeaderId};
use crate::config::{DecorationConfig, HeaderMode};
use crate::error::DecorationError;
use crate::groups::GroupResolver;
use crate::list::ListViewport;
use crate::overlay::HeaderRects;
use crate::provider::{HeaderProvider, RealizedHeader};
use crate::state::{HeaderState, HeaderStates};

/// Hooks a list calls around its own layout and drawing.
///
/// `item_offsets` runs during layout for every item that is laid out and
/// returns the space to leave around it. `draw_over` runs after the items are
/// drawn and paints on top of them.
pub trait ItemDecoration {
    fn item_offsets(
        &mut self,
        position: usize,
        list: &ListViewport,
    ) -> Result<EdgeInsets, DecorationError>;

    fn draw_over(
        &mut self,
        list: &ListViewport,
        canvas: &mut dyn Canvas,
    ) -> Result<(), DecorationError>;
}

/// Section headers for a linear list, drawn statically or pinned.
pub struct HeaderDecoration<A: HeaderAdapter> {
    pub(crate) adapter: Rc<A>,
    pub(crate) config: DecorationConfig,
    pub(crate) provider: HeaderProvider<A::Holder>,
    pub(crate) groups: GroupResolver,
    pub(crate) states: HeaderStates,
    pub(crate) rects: HeaderRects,
}

impl<A: HeaderAdapter> HeaderDecoration<A> {
    pub fn new(adapter: Rc<A>, config: DecorationConfig) -> Self {
        Self {
            adapter,
            config,
            provider: HeaderProvider::new(),
            groups: GroupResolver::new(config.group_lookup),
            states: HeaderStates::new(),
            rects: HeaderRects::default(),
        }
    }

    pub fn sticky(adapter: Rc<A>) -> Self {
        Self::new(adapter, DecorationConfig::new().mode(HeaderMode::Sticky))
    }

    pub fn new_static(adapter: Rc<A>) -> Self {
        Self::new(adapter, DecorationConfig::new().mode(HeaderMode::Static))
    }

    pub fn adapter(&self) -> &Rc<A> {
        &self.adapter
    }

    pub fn config(&self) -> DecorationConfig {
        self.config
    }

    /// The header for `position`, built and measured on first use. Sticky
    /// decorations start a fresh header inline.
    pub fn header_for(
        &mut self,
        list: &ListViewport,
        position: usize,
    ) -> Result<Rc<RealizedHeader<A::Holder>>, DecorationError> {
        let resolved = self.provider.resolve(self.adapter.as_ref(), list, position)?;
        if resolved.fresh && self.config.is_sticky() {
            self.states.reset(resolved.header.id());
        }
        Ok(resolved.header)
    }

    pub fn is_group_start(&mut self, position: usize) -> bool {
        self.groups.is_group_start(self.adapter.as_ref(), position)
    }

    /// Records `state` for `id`, notifying the adapter on change. Returns
    /// whether the adapter was notified.
    pub fn set_header_state(&mut self, id: HeaderId, position: usize, state: HeaderState) -> bool {
        let header = self.provider.get(id).map(Rc::clone);
        self.states.set_and_notify(
            self.adapter.as_ref(),
            header.as_ref().map(|h| h.holder()),
            id,
            position,
            state,
        )
    }

    pub fn header_state(&self, id: HeaderId) -> Option<HeaderState> {
        self.states.get(id)
    }

    /// Rectangles drawn by the last sticky pass.
    pub fn header_rects(&self) -> &HeaderRects {
        &self.rects
    }

    /// Position whose header was drawn under `(x, y)` in the last sticky pass.
    pub fn find_header_at(&self, x: f32, y: f32) -> Option<usize> {
        self.rects.find(sticky_core::Vec2::new(x, y))
    }

    pub fn cached_headers(&self) -> usize {
        self.provider.len()
    }

    /// Forgets every realized header and the group table. The list is not
    /// redrawn; request a new pass after calling this.
    pub fn invalidate_headers(&mut self) {
        self.provider.invalidate();
        self.groups.invalidate();
    }
}

impl<A: HeaderAdapter> ItemDecoration for HeaderDecoration<A> {
    fn item_offsets(
        &mut self,
        position: usize,
        list: &ListViewport,
    ) -> Result<EdgeInsets, DecorationError> {
        let orientation = list.orientation()?;
        if !self.is_group_start(position) {
            return Ok(EdgeInsets::ZERO);
        }
        let header = self.header_for(list, position)?;
        Ok(orientation.leading_inset(header.main_extent(orientation)))
    }

    fn draw_over(
        &mut self,
        list: &ListViewport,
        canvas: &mut dyn Canvas,
    ) -> Result<(), DecorationError> {
        match self.config.mode {
            HeaderMode::Static => self.draw_static(list, canvas),
            HeaderMode::Sticky => self.draw_sticky(list, canvas),
        }
    }
}
