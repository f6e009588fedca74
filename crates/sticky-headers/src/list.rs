//! What the host list tells the decoration about itself on every pass.

use sticky_core::{EdgeInsets, Rect, Size, Vec2};

use crate::error::DecorationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Coordinate along the scroll direction.
    pub fn main(self, p: Vec2) -> f32 {
        match self {
            Orientation::Vertical => p.y,
            Orientation::Horizontal => p.x,
        }
    }

    pub fn cross(self, p: Vec2) -> f32 {
        match self {
            Orientation::Vertical => p.x,
            Orientation::Horizontal => p.y,
        }
    }

    pub fn main_extent(self, s: Size) -> f32 {
        match self {
            Orientation::Vertical => s.height,
            Orientation::Horizontal => s.width,
        }
    }

    pub fn cross_extent(self, s: Size) -> f32 {
        match self {
            Orientation::Vertical => s.width,
            Orientation::Horizontal => s.height,
        }
    }

    pub fn leading_margin(self, m: EdgeInsets) -> f32 {
        match self {
            Orientation::Vertical => m.top,
            Orientation::Horizontal => m.left,
        }
    }

    pub fn point(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Orientation::Vertical => Vec2::new(cross, main),
            Orientation::Horizontal => Vec2::new(main, cross),
        }
    }

    /// Insets that reserve `extent` before an item.
    pub fn leading_inset(self, extent: f32) -> EdgeInsets {
        match self {
            Orientation::Vertical => EdgeInsets {
                top: extent,
                ..EdgeInsets::ZERO
            },
            Orientation::Horizontal => EdgeInsets {
                left: extent,
                ..EdgeInsets::ZERO
            },
        }
    }
}

/// Arrangement the host list lays its children out with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    Linear(Orientation),
    Grid { spans: usize },
    StaggeredGrid { spans: usize },
    Custom(&'static str),
}

impl LayoutKind {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutKind::Linear(_) => "linear",
            LayoutKind::Grid { .. } => "grid",
            LayoutKind::StaggeredGrid { .. } => "staggered grid",
            LayoutKind::Custom(name) => *name,
        }
    }
}

/// A laid-out child currently on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleChild {
    pub position: usize,
    /// Border box in viewport coordinates, reserved header space excluded.
    pub bounds: Rect,
    pub margins: EdgeInsets,
}

impl VisibleChild {
    pub fn new(position: usize, bounds: Rect) -> Self {
        Self {
            position,
            bounds,
            margins: EdgeInsets::ZERO,
        }
    }

    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }

    pub fn leading(&self, orientation: Orientation) -> f32 {
        orientation.main(Vec2::new(self.bounds.x, self.bounds.y))
    }

    pub fn cross_leading(&self, orientation: Orientation) -> f32 {
        orientation.cross(Vec2::new(self.bounds.x, self.bounds.y))
    }
}

/// Snapshot of the host list for one layout or draw pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ListViewport {
    pub layout: LayoutKind,
    pub size: Size,
    pub padding: EdgeInsets,
    /// Ascending visual order, first entry is the leading visible child.
    pub children: Vec<VisibleChild>,
}

impl ListViewport {
    pub fn new(layout: LayoutKind, size: Size) -> Self {
        Self {
            layout,
            size,
            padding: EdgeInsets::ZERO,
            children: Vec::new(),
        }
    }

    pub fn linear(orientation: Orientation, size: Size) -> Self {
        Self::new(LayoutKind::Linear(orientation), size)
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_children(mut self, children: Vec<VisibleChild>) -> Self {
        self.children = children;
        self
    }

    pub fn push_child(&mut self, child: VisibleChild) {
        self.children.push(child);
    }

    pub fn orientation(&self) -> Result<Orientation, DecorationError> {
        match self.layout {
            LayoutKind::Linear(o) => Ok(o),
            other => Err(DecorationError::UnsupportedLayout { kind: other.name() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_helpers_swap_with_orientation() {
        let p = Vec2::new(3.0, 7.0);
        assert_eq!(Orientation::Vertical.main(p), 7.0);
        assert_eq!(Orientation::Horizontal.main(p), 3.0);
        assert_eq!(Orientation::Horizontal.point(10.0, 2.0), Vec2::new(10.0, 2.0));
        assert_eq!(Orientation::Vertical.point(10.0, 2.0), Vec2::new(2.0, 10.0));
        assert_eq!(Orientation::Horizontal.leading_inset(24.0).left, 24.0);
        assert_eq!(Orientation::Vertical.leading_inset(24.0).top, 24.0);
    }

    #[test]
    fn only_linear_layouts_have_an_orientation() {
        let size = Size::new(100.0, 100.0);
        assert_eq!(
            ListViewport::linear(Orientation::Horizontal, size)
                .orientation()
                .unwrap(),
            Orientation::Horizontal
        );
        let err = ListViewport::new(LayoutKind::Grid { spans: 3 }, size)
            .orientation()
            .unwrap_err();
        assert!(matches!(
            err,
            DecorationError::UnsupportedLayout { kind: "grid" }
        ));
        assert_eq!(err.to_string(), "header decorations need a linear layout, got grid");
    }
}
