//! # Header measurement
//!
//! A header is measured once, the first time its identifier is seen, and then
//! painted many times at different offsets. This module does both halves:
//!
//! - [`child_measure_spec`] resolves how much room the list offers a header,
//!   given the list's own spec, its padding and the header's [`Dimension`].
//! - [`measure_view`] runs the flexbox engine (`taffy`) over the header's view
//!   tree under those specs and paints the result at origin `(0, 0)` into a
//!   [`LaidOutView`].
//!
//! Drawing a [`LaidOutView`] replays its nodes through a [`Canvas`], so the
//! caller only has to translate the canvas to where the header belongs.

use taffy::prelude::{AvailableSpace, TaffyTree, length};
use taffy::style::{AlignItems, Display, FlexDirection, JustifyContent, Style};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::LayoutError;
use crate::modifier::Dimension;
use crate::render_api::Canvas;
use crate::view::{SceneNode, View, ViewKind};
use crate::{Modifier, Rect, Size, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureMode {
    Exactly,
    AtMost,
    Unspecified,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: f32,
}

impl MeasureSpec {
    pub fn exactly(size: f32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size: size.max(0.0),
        }
    }
    pub fn at_most(size: f32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size: size.max(0.0),
        }
    }
    pub fn unspecified(size: f32) -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: size.max(0.0),
        }
    }
}

/// Spec for a child of a parent measured with `parent`, after removing the
/// parent's `padding` along the same axis.
pub fn child_measure_spec(parent: MeasureSpec, padding: f32, dim: Dimension) -> MeasureSpec {
    let available = (parent.size - padding).max(0.0);
    match (parent.mode, dim) {
        (_, Dimension::Exact(px)) => MeasureSpec::exactly(px),
        (MeasureMode::Exactly, Dimension::MatchParent) => MeasureSpec::exactly(available),
        (MeasureMode::AtMost, Dimension::MatchParent) => MeasureSpec::at_most(available),
        (MeasureMode::Exactly | MeasureMode::AtMost, Dimension::WrapContent) => {
            MeasureSpec::at_most(available)
        }
        (MeasureMode::Unspecified, _) => MeasureSpec::unspecified(available),
    }
}

/// A measured view tree, painted relative to its own top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutView {
    pub size: Size,
    pub nodes: Vec<SceneNode>,
}

impl LaidOutView {
    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for node in &self.nodes {
            canvas.draw(node);
        }
    }
}

#[derive(Clone)]
enum NodeCtx {
    Text { text: String, font_size: f32 },
    Container,
}

struct Built {
    node: taffy::NodeId,
    children: Vec<Built>,
}

const GLYPH_WIDTH_EM: f32 = 0.6;
const LINE_HEIGHT_EM: f32 = 1.3;

fn style_from_modifier(m: &Modifier, kind: &ViewKind) -> Style {
    let mut s: Style = Style::default();
    s.display = Display::Flex;
    s.flex_direction = match kind {
        ViewKind::Row => FlexDirection::Row,
        _ => FlexDirection::Column,
    };
    s.align_items = match kind {
        ViewKind::Text { .. } => Some(AlignItems::FlexStart),
        _ => Some(AlignItems::Stretch),
    };
    s.justify_content = Some(JustifyContent::FlexStart);

    if let Some(p) = m.padding {
        s.padding = taffy::geometry::Rect {
            left: length(p.left),
            right: length(p.right),
            top: length(p.top),
            bottom: length(p.bottom),
        };
    }
    if let Some(b) = &m.border {
        let w = length(b.width.max(0.0));
        s.border = taffy::geometry::Rect {
            left: w,
            right: w,
            top: w,
            bottom: w,
        };
    }

    if let Some(w) = m.width {
        s.size.width = length(w.max(0.0));
    }
    if let Some(h) = m.height {
        s.size.height = length(h.max(0.0));
    }
    if let Some(h) = m.min_height {
        s.min_size.height = length(h.max(0.0));
    }
    s
}

fn build_node(v: &View, t: &mut TaffyTree<NodeCtx>) -> Result<Built, LayoutError> {
    let style = style_from_modifier(&v.modifier, &v.kind);
    if let ViewKind::Text {
        text, font_size, ..
    } = &v.kind
    {
        let node = t.new_leaf_with_context(
            style,
            NodeCtx::Text {
                text: text.clone(),
                font_size: *font_size,
            },
        )?;
        return Ok(Built {
            node,
            children: vec![],
        });
    }

    let children = v
        .children
        .iter()
        .map(|c| build_node(c, t))
        .collect::<Result<Vec<_>, _>>()?;
    let ids: Vec<taffy::NodeId> = children.iter().map(|c| c.node).collect();
    let node = t.new_with_children(style, &ids)?;
    t.set_node_context(node, Some(NodeCtx::Container))?;
    Ok(Built { node, children })
}

/// Applies a root spec to one axis of the root style and returns the space
/// the engine is allowed to fill along it.
fn constrain_root(
    size: &mut taffy::style::Dimension,
    max: &mut taffy::style::Dimension,
    spec: MeasureSpec,
) -> AvailableSpace {
    match spec.mode {
        MeasureMode::Exactly => {
            *size = length(spec.size);
            AvailableSpace::Definite(spec.size)
        }
        MeasureMode::AtMost => {
            *max = length(spec.size);
            AvailableSpace::Definite(spec.size)
        }
        MeasureMode::Unspecified => AvailableSpace::MaxContent,
    }
}

fn paint(
    v: &View,
    built: &Built,
    t: &TaffyTree<NodeCtx>,
    origin: Vec2,
    out: &mut Vec<SceneNode>,
) -> Result<(), LayoutError> {
    let l = t.layout(built.node)?;
    let rect = Rect {
        x: origin.x + l.location.x,
        y: origin.y + l.location.y,
        w: l.size.width,
        h: l.size.height,
    };

    if let Some(bg) = v.modifier.background {
        out.push(SceneNode::Rect {
            rect,
            color: bg,
            radius: v.modifier.border.as_ref().map(|b| b.radius).unwrap_or(0.0),
        });
    }
    if let Some(b) = &v.modifier.border {
        out.push(SceneNode::Border {
            rect,
            color: b.color,
            width: b.width,
            radius: b.radius,
        });
    }

    if let ViewKind::Text {
        text,
        color,
        font_size,
    } = &v.kind
    {
        let inset = v.modifier.padding.unwrap_or_default();
        out.push(SceneNode::Text {
            rect: Rect {
                x: rect.x + inset.left,
                y: rect.y + inset.top,
                w: (rect.w - inset.horizontal()).max(0.0),
                h: (rect.h - inset.vertical()).max(0.0),
            },
            text: text.clone(),
            color: *color,
            size: *font_size,
        });
        return Ok(());
    }

    let child_origin = Vec2::new(rect.x, rect.y);
    for (child, child_built) in v.children.iter().zip(&built.children) {
        paint(child, child_built, t, child_origin, out)?;
    }
    Ok(())
}

/// Measures `view` under the given specs and lays it out at `(0, 0)`.
pub fn measure_view(
    view: &View,
    width: MeasureSpec,
    height: MeasureSpec,
) -> Result<LaidOutView, LayoutError> {
    let mut taffy: TaffyTree<NodeCtx> = TaffyTree::new();
    let root = build_node(view, &mut taffy)?;

    let mut rs = taffy.style(root.node)?.clone();
    let available = taffy::geometry::Size {
        width: constrain_root(&mut rs.size.width, &mut rs.max_size.width, width),
        height: constrain_root(&mut rs.size.height, &mut rs.max_size.height, height),
    };
    taffy.set_style(root.node, rs)?;

    taffy.compute_layout_with_measure(
        root.node,
        available,
        |known, _available, _node, ctx, _style| match ctx {
            Some(NodeCtx::Text { text, font_size }) => {
                let glyphs = text.graphemes(true).count() as f32;
                taffy::geometry::Size {
                    width: known
                        .width
                        .unwrap_or(glyphs * *font_size * GLYPH_WIDTH_EM),
                    height: known.height.unwrap_or(*font_size * LINE_HEIGHT_EM),
                }
            }
            Some(NodeCtx::Container) | None => taffy::geometry::Size::ZERO,
        },
    )?;

    let root_layout = taffy.layout(root.node)?;
    let size = Size {
        width: root_layout.size.width,
        height: root_layout.size.height,
    };
    // Paint relative to the root, whatever location the engine gave it.
    let origin = Vec2::new(-root_layout.location.x, -root_layout.location.y);

    let mut nodes = Vec::new();
    paint(view, &root, &taffy, origin, &mut nodes)?;
    Ok(LaidOutView { size, nodes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::LayoutParams;
    use crate::Color;
    use crate::view::{Column, Row, Surface, Text, TextStyle};

    #[test]
    fn child_spec_resolution() {
        let exact = MeasureSpec::exactly(400.0);
        assert_eq!(
            child_measure_spec(exact, 16.0, Dimension::MatchParent),
            MeasureSpec::exactly(384.0)
        );
        assert_eq!(
            child_measure_spec(exact, 16.0, Dimension::WrapContent),
            MeasureSpec::at_most(384.0)
        );
        assert_eq!(
            child_measure_spec(exact, 16.0, Dimension::Exact(50.0)),
            MeasureSpec::exactly(50.0)
        );

        let free = MeasureSpec::unspecified(800.0);
        assert_eq!(
            child_measure_spec(free, 0.0, Dimension::WrapContent).mode,
            MeasureMode::Unspecified
        );
        assert_eq!(
            child_measure_spec(free, 0.0, Dimension::Exact(30.0)),
            MeasureSpec::exactly(30.0)
        );
    }

    #[test]
    fn exact_width_and_fixed_height() {
        let header = Surface(Modifier::new().height(48.0).background(Color::BLACK));
        let laid = measure_view(
            &header,
            MeasureSpec::exactly(320.0),
            MeasureSpec::unspecified(600.0),
        )
        .unwrap();
        assert_eq!(laid.size, Size::new(320.0, 48.0));
        assert_eq!(
            laid.nodes,
            vec![SceneNode::Rect {
                rect: Rect::new(0.0, 0.0, 320.0, 48.0),
                color: Color::BLACK,
                radius: 0.0,
            }]
        );
    }

    #[test]
    fn border_is_painted_over_background() {
        let header = Surface(
            Modifier::new()
                .height(20.0)
                .background(Color::BLACK)
                .border(2.0, Color::WHITE, 4.0),
        );
        let laid = measure_view(
            &header,
            MeasureSpec::exactly(100.0),
            MeasureSpec::unspecified(0.0),
        )
        .unwrap();
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert_eq!(
            laid.nodes,
            vec![
                SceneNode::Rect {
                    rect,
                    color: Color::BLACK,
                    radius: 4.0,
                },
                SceneNode::Border {
                    rect,
                    color: Color::WHITE,
                    width: 2.0,
                    radius: 4.0,
                },
            ]
        );
    }

    #[test]
    fn wrap_height_follows_children() {
        let header = Column(Modifier::new().padding(4.0)).with_children(vec![
            Surface(Modifier::new().height(10.0)),
            Surface(Modifier::new().height(20.0)),
        ]);
        let laid = measure_view(
            &header,
            MeasureSpec::exactly(100.0),
            MeasureSpec::unspecified(0.0),
        )
        .unwrap();
        assert_eq!(laid.height(), 38.0);
    }

    #[test]
    fn row_children_are_placed_side_by_side() {
        let header = Row(Modifier::new().height(20.0)).with_children(vec![
            Surface(Modifier::new().width(30.0).background(Color::WHITE)),
            Surface(Modifier::new().width(40.0).background(Color::BLACK)),
        ]);
        let laid = measure_view(
            &header,
            MeasureSpec::exactly(200.0),
            MeasureSpec::unspecified(0.0),
        )
        .unwrap();
        let rects: Vec<Rect> = laid.nodes.iter().map(SceneNode::rect).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, 0.0, 30.0, 20.0),
                Rect::new(30.0, 0.0, 40.0, 20.0)
            ]
        );
    }

    #[test]
    fn text_is_estimated_from_graphemes() {
        let header = Text("ABCD").size(10.0);
        let laid = measure_view(
            &header,
            MeasureSpec::unspecified(0.0),
            MeasureSpec::unspecified(0.0),
        )
        .unwrap();
        assert!((laid.width() - 24.0).abs() < 0.01);
        assert!((laid.height() - 13.0).abs() < 0.01);
        assert!(matches!(&laid.nodes[0], SceneNode::Text { text, .. } if text == "ABCD"));
    }

    #[test]
    fn layout_params_are_plain_data() {
        let m = Modifier::new().layout_params(LayoutParams::new(
            Dimension::MatchParent,
            Dimension::Exact(24.0),
        ));
        assert_eq!(m.layout_params.unwrap().height, Dimension::Exact(24.0));
    }
}
