use crate::{Color, Modifier, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Surface,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        font_size: f32,
    },
}

/// A small declarative tree describing what a header looks like.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn child(mut self, kid: View) -> Self {
        self.children.push(kid);
        self
    }
}

#[allow(non_snake_case)]
pub fn Surface(modifier: Modifier) -> View {
    View::new(ViewKind::Surface).modifier(modifier)
}

#[allow(non_snake_case)]
pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier)
}

#[allow(non_snake_case)]
pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

#[allow(non_snake_case)]
pub fn Text(text: impl Into<String>) -> View {
    View::new(
        ViewKind::Text {
            text: text.into(),
            color: Color::WHITE,
            font_size: 16.0,
        },
    )
}

pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, px: f32) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn size(mut self, px: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = px;
        }
        self
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
}

impl SceneNode {
    pub fn rect(&self) -> Rect {
        match self {
            SceneNode::Rect { rect, .. }
            | SceneNode::Border { rect, .. }
            | SceneNode::Text { rect, .. } => *rect,
        }
    }

    pub fn translated(&self, dx: f32, dy: f32) -> SceneNode {
        let mut node = self.clone();
        match &mut node {
            SceneNode::Rect { rect, .. }
            | SceneNode::Border { rect, .. }
            | SceneNode::Text { rect, .. } => *rect = rect.translate(dx, dy),
        }
        node
    }
}
