use std::collections::HashMap;
use std::rc::Rc;

use slotmap::SlotMap;
use sticky_core::{
    Canvas, Dimension, LaidOutView, LayoutParams, MeasureSpec, Size, Vec2, child_measure_spec,
    measure_view,
};

use crate::adapter::{HeaderAdapter, HeaderHolder, HeaderId};
use crate::error::DecorationError;
use crate::list::{ListViewport, Orientation};

slotmap::new_key_type! {
    pub struct HeaderKey;
}

/// A header that has been created, bound, measured and laid out at `(0, 0)`.
#[derive(Debug)]
pub struct RealizedHeader<H> {
    id: HeaderId,
    holder: H,
    layout: LaidOutView,
}

impl<H> RealizedHeader<H> {
    pub fn id(&self) -> HeaderId {
        self.id
    }

    pub fn holder(&self) -> &H {
        &self.holder
    }

    pub fn layout(&self) -> &LaidOutView {
        &self.layout
    }

    pub fn size(&self) -> Size {
        self.layout.size
    }

    pub fn main_extent(&self, orientation: Orientation) -> f32 {
        orientation.main_extent(self.layout.size)
    }

    pub fn cross_extent(&self, orientation: Orientation) -> f32 {
        orientation.cross_extent(self.layout.size)
    }

    pub fn draw_at(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        canvas.save();
        canvas.translate(offset.x, offset.y);
        self.layout.draw(canvas);
        canvas.restore();
    }
}

/// Outcome of a lookup; `fresh` is set when the header was built just now.
pub struct Resolved<H> {
    pub header: Rc<RealizedHeader<H>>,
    pub fresh: bool,
}

/// Headers fill the list across its scroll axis and wrap their content along it.
pub fn default_layout_params(orientation: Orientation) -> LayoutParams {
    match orientation {
        Orientation::Vertical => LayoutParams::new(Dimension::MatchParent, Dimension::WrapContent),
        Orientation::Horizontal => {
            LayoutParams::new(Dimension::WrapContent, Dimension::MatchParent)
        }
    }
}

/// Caches one realized header per identifier.
#[derive(Debug)]
pub struct HeaderProvider<H> {
    headers: SlotMap<HeaderKey, Rc<RealizedHeader<H>>>,
    by_id: HashMap<HeaderId, HeaderKey>,
}

impl<H> Default for HeaderProvider<H> {
    fn default() -> Self {
        Self {
            headers: SlotMap::with_key(),
            by_id: HashMap::new(),
        }
    }
}

impl<H: HeaderHolder> HeaderProvider<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn get(&self, id: HeaderId) -> Option<&Rc<RealizedHeader<H>>> {
        self.by_id.get(&id).and_then(|k| self.headers.get(*k))
    }

    pub fn resolve<A>(
        &mut self,
        adapter: &A,
        list: &ListViewport,
        position: usize,
    ) -> Result<Resolved<H>, DecorationError>
    where
        A: HeaderAdapter<Holder = H> + ?Sized,
    {
        let id = adapter.header_id(position);
        if let Some(header) = self.get(id) {
            return Ok(Resolved {
                header: Rc::clone(header),
                fresh: false,
            });
        }

        let orientation = list.orientation()?;
        let mut holder = adapter.create_header(list, position);
        adapter.bind_header(&mut holder, position);

        let view = holder.view();
        let params = view
            .modifier
            .layout_params
            .unwrap_or_else(|| default_layout_params(orientation));
        let (parent_w, parent_h) = match orientation {
            Orientation::Vertical => (
                MeasureSpec::exactly(list.size.width),
                MeasureSpec::unspecified(list.size.height),
            ),
            Orientation::Horizontal => (
                MeasureSpec::unspecified(list.size.width),
                MeasureSpec::exactly(list.size.height),
            ),
        };
        let width = child_measure_spec(parent_w, list.padding.horizontal(), params.width);
        let height = child_measure_spec(parent_h, list.padding.vertical(), params.height);
        let layout = measure_view(view, width, height)?;
        log::debug!(
            "realized header {id} for position {position}: {}x{}",
            layout.size.width,
            layout.size.height
        );

        let header = Rc::new(RealizedHeader {
            id,
            holder,
            layout,
        });
        let key = self.headers.insert(Rc::clone(&header));
        self.by_id.insert(id, key);
        Ok(Resolved {
            header,
            fresh: true,
        })
    }

    pub fn invalidate(&mut self) {
        if !self.headers.is_empty() {
            log::debug!("dropping {} cached headers", self.headers.len());
        }
        self.headers.clear();
        self.by_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SectionAdapter, vertical_list};
    use sticky_core::{EdgeInsets, Modifier, Surface};

    #[test]
    fn same_id_same_handle() {
        let adapter = SectionAdapter::vertical(&[1, 1, 2]);
        let list = vertical_list(400.0, 1000.0, &[]);
        let mut provider = HeaderProvider::new();

        let a = provider.resolve(&adapter, &list, 0).unwrap();
        let b = provider.resolve(&adapter, &list, 1).unwrap();
        assert!(a.fresh);
        assert!(!b.fresh);
        assert!(Rc::ptr_eq(&a.header, &b.header));
        assert_eq!(adapter.created(), vec![0]);
        assert_eq!(a.header.holder().bound, Some(0));

        let c = provider.resolve(&adapter, &list, 2).unwrap();
        assert!(!Rc::ptr_eq(&a.header, &c.header));
        assert_eq!(provider.len(), 2);
    }

    #[test]
    fn invalidation_builds_new_handles() {
        let adapter = SectionAdapter::vertical(&[1, 1]);
        let list = vertical_list(400.0, 1000.0, &[]);
        let mut provider = HeaderProvider::new();

        let before = provider.resolve(&adapter, &list, 0).unwrap().header;
        provider.invalidate();
        assert!(provider.is_empty());
        let after = provider.resolve(&adapter, &list, 1).unwrap().header;
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(adapter.created(), vec![0, 1]);
    }

    #[test]
    fn header_fills_cross_axis_inside_padding() {
        let adapter = SectionAdapter::vertical(&[1]);
        let list = vertical_list(400.0, 1000.0, &[]).with_padding(EdgeInsets {
            left: 10.0,
            right: 30.0,
            ..EdgeInsets::ZERO
        });
        let mut provider = HeaderProvider::new();
        let header = provider.resolve(&adapter, &list, 0).unwrap().header;
        assert_eq!(header.size(), Size::new(360.0, 100.0));
        assert_eq!(header.main_extent(Orientation::Vertical), 100.0);
        assert_eq!(header.cross_extent(Orientation::Vertical), 360.0);
    }

    #[test]
    fn explicit_layout_params_win() {
        let adapter = SectionAdapter::vertical(&[1]).with_view(|_| {
            Surface(Modifier::new().layout_params(LayoutParams::new(
                Dimension::Exact(120.0),
                Dimension::Exact(24.0),
            )))
        });
        let list = vertical_list(400.0, 1000.0, &[]);
        let mut provider = HeaderProvider::new();
        let header = provider.resolve(&adapter, &list, 0).unwrap().header;
        assert_eq!(header.size(), Size::new(120.0, 24.0));
    }

    #[test]
    fn horizontal_headers_fill_height() {
        let adapter = SectionAdapter::horizontal(&[4]);
        let list = ListViewport::linear(Orientation::Horizontal, Size::new(800.0, 120.0));
        let mut provider = HeaderProvider::new();
        let header = provider.resolve(&adapter, &list, 0).unwrap().header;
        assert_eq!(header.size(), Size::new(100.0, 120.0));
    }
}
