//! # Overlay rendering
//!
//! Both modes draw after the list has drawn its items, on top of them.
//!
//! **Static** draws the header of every visible group start just before
//! that item, in the space [`ItemDecoration::item_offsets`] reserved for it,
//! so headers scroll with their content.
//!
//! **Sticky** pins the header of the leading visible item to the leading
//! edge of the viewport:
//!
//! - `lead = first.leading - header.extent`. Zero means the item sits right
//!   after the header ([`HeaderState::Inline`]); negative means it has
//!   scrolled underneath ([`HeaderState::Stacked`]). The header is never
//!   drawn ahead of its resting place, so it is offset by `max(lead, 0)`.
//! - The first child that the pinned header does not cover is the "next
//!   view". If it starts another group and
//!   `next.leading - next_header.extent - header.extent` is negative, the
//!   pinned header is moved back by that amount: the incoming header pushes
//!   it out. While that happens both headers are inline.
//! - Every other visible group start gets its header drawn flush before it.
//!
//! Sticky passes remember where each header went, for hit testing until the
//! next pass.
//!
//! [`ItemDecoration::item_offsets`]: crate::ItemDecoration::item_offsets

use smallvec::SmallVec;
use sticky_core::{Canvas, Rect, Vec2};

use crate::adapter::{HeaderAdapter, has_header};
use crate::decoration::HeaderDecoration;
use crate::error::DecorationError;
use crate::list::{ListViewport, Orientation, VisibleChild};
use crate::state::HeaderState;

/// Where headers were drawn in the last sticky pass, keyed by item position.
#[derive(Clone, Debug, Default)]
pub struct HeaderRects {
    rects: SmallVec<[(usize, Rect); 4]>,
}

impl HeaderRects {
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn record(&mut self, position: usize, rect: Rect) {
        match self.rects.iter_mut().find(|(p, _)| *p == position) {
            Some(entry) => entry.1 = rect,
            None => self.rects.push((position, rect)),
        }
    }

    pub fn get(&self, position: usize) -> Option<Rect> {
        self.rects
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, r)| *r)
    }

    pub fn find(&self, point: Vec2) -> Option<usize> {
        self.rects
            .iter()
            .find(|(_, r)| r.contains(point))
            .map(|(p, _)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.rects.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// First child not covered by a pinned header of `extent`.
fn next_view(list: &ListViewport, orientation: Orientation, extent: f32) -> Option<&VisibleChild> {
    list.children.iter().find(|child| {
        child.leading(orientation) - orientation.leading_margin(child.margins) > extent
    })
}

impl<A: HeaderAdapter> HeaderDecoration<A> {
    pub(crate) fn draw_static(
        &mut self,
        list: &ListViewport,
        canvas: &mut dyn Canvas,
    ) -> Result<(), DecorationError> {
        let orientation = list.orientation()?;
        if self.adapter.item_count() == 0 {
            return Ok(());
        }
        for child in &list.children {
            let position = child.position;
            if !has_header(self.adapter.header_id(position)) || !self.is_group_start(position) {
                continue;
            }
            let header = self.header_for(list, position)?;
            let offset = orientation.point(
                child.leading(orientation) - header.main_extent(orientation),
                0.0,
            );
            header.draw_at(canvas, offset);
        }
        Ok(())
    }

    pub(crate) fn draw_sticky(
        &mut self,
        list: &ListViewport,
        canvas: &mut dyn Canvas,
    ) -> Result<(), DecorationError> {
        let orientation = list.orientation()?;
        self.rects.clear();

        let Some(first) = list.children.first() else {
            return Ok(());
        };
        if self.adapter.item_count() == 0 {
            return Ok(());
        }

        let first_position = first.position;
        let first_id = self.adapter.header_id(first_position);
        if has_header(first_id) {
            let first_header = self.header_for(list, first_position)?;
            let first_extent = first_header.main_extent(orientation);
            let next = next_view(list, orientation, first_extent);

            let lead = first.leading(orientation) - first_extent;
            if lead == 0.0 {
                self.set_header_state(first_id, first_position, HeaderState::Inline);
            } else if lead < 0.0 {
                self.set_header_state(first_id, first_position, HeaderState::Stacked);
            }

            let mut main = lead.max(0.0);
            let cross = (first.cross_leading(orientation)
                - first_header.cross_extent(orientation))
            .max(0.0);

            if let Some(next) = next {
                if next.position > 0 && self.is_group_start(next.position) {
                    let second_header = self.header_for(list, next.position)?;
                    let push = next.leading(orientation)
                        - second_header.main_extent(orientation)
                        - first_extent;
                    if push < 0.0 {
                        main += push;
                        self.set_header_state(first_id, first_position, HeaderState::Inline);
                        self.set_header_state(
                            second_header.id(),
                            next.position,
                            HeaderState::Inline,
                        );
                    }
                }
            }

            let offset = orientation.point(main, cross);
            first_header.draw_at(canvas, offset);
            self.rects.record(
                first_position,
                Rect::from_origin_size(offset, first_header.size()),
            );
        }

        for child in list.children.iter().skip(1) {
            if !self.is_group_start(child.position) {
                continue;
            }
            let header = self.header_for(list, child.position)?;
            let offset = orientation.point(
                child.leading(orientation) - header.main_extent(orientation),
                0.0,
            );
            header.draw_at(canvas, offset);
            self.rects
                .record(child.position, Rect::from_origin_size(offset, header.size()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_replaces_same_position() {
        let mut rects = HeaderRects::default();
        rects.record(3, Rect::new(0.0, 0.0, 10.0, 10.0));
        rects.record(3, Rect::new(0.0, 20.0, 10.0, 10.0));
        assert_eq!(rects.len(), 1);
        assert_eq!(rects.get(3), Some(Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn find_misses_outside_every_rect() {
        let mut rects = HeaderRects::default();
        rects.record(0, Rect::new(0.0, 0.0, 100.0, 40.0));
        rects.record(7, Rect::new(0.0, 200.0, 100.0, 40.0));
        assert_eq!(rects.find(Vec2::new(50.0, 20.0)), Some(0));
        assert_eq!(rects.find(Vec2::new(50.0, 210.0)), Some(7));
        assert_eq!(rects.find(Vec2::new(50.0, 100.0)), None);
        rects.clear();
        assert!(rects.is_empty());
        assert_eq!(rects.find(Vec2::new(50.0, 20.0)), None);
    }
}
